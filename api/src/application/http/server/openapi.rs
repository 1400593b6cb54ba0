use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, food::router::FoodApiDoc,
    health::router::HealthApiDoc, history::router::HistoryApiDoc, scan::router::ScanApiDoc,
    user::router::UserApiDoc,
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SafeBite API",
        description = "Allergen analysis for scanned and searched foods"
    ),
    modifiers(&BearerSecurity)
)]
pub struct ApiDoc;

/// Full document: every area's paths, unprefixed.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(AuthenticationApiDoc::openapi());
    openapi.merge(UserApiDoc::openapi());
    openapi.merge(HistoryApiDoc::openapi());
    openapi.merge(FoodApiDoc::openapi());
    openapi.merge(ScanApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
