mod ocr;

pub use ocr::{OcrEngine, RecognitionError, is_supported_image};
