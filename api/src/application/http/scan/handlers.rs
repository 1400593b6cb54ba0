pub mod analyze_food;
pub mod scan_barcode;
pub mod scan_image;
pub mod scan_voice;
