pub mod hmac_token_issuer;
