#[derive(Debug, Clone)]
pub struct SearchFoodsInput {
    pub query: String,
    pub max_results: u32,
}

#[derive(Debug, Clone)]
pub struct BarcodeScanInput {
    pub barcode: String,
}

#[derive(Debug, Clone, Default)]
pub struct VoiceScanInput {
    pub text: Option<String>,
    pub audio_base64: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ImageScanInput {
    pub image_data: Vec<u8>,
}
