//! # OCR Extraction Scenarios
//!
//! End-to-end vectors through the public API: OCR text in, classification,
//! numbers, and names out. Vectors mirror what upload handlers see from the
//! OCR engine, including mixed case, line breaks, and hyphenated groups.

use kyc_core::{
    parse_document_text, validate_aadhaar, validate_document, validate_gst, validate_pan,
    DocumentKind, DocumentType, ExtractedDocumentData, DEFAULT_OCR_VERIFIED_THRESHOLD,
};

/// (OCR text, type, Aadhaar, PAN, GSTIN, name, business name, confidence)
type Vector = (
    &'static str,
    DocumentType,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
    u8,
);

const VECTORS: &[Vector] = &[
    (
        "NAME: RAHUL SHARMA AADHAAR 1234 5678 9010",
        DocumentType::Aadhaar,
        Some("123456789010"),
        None,
        None,
        Some("RAHUL SHARMA"),
        None,
        85,
    ),
    (
        "hello world",
        DocumentType::Unknown,
        None,
        None,
        None,
        None,
        None,
        30,
    ),
    (
        "Government of India\nName: Anita Rao\n2345-6789-0124\nDOB: 01/01/1990",
        DocumentType::Aadhaar,
        Some("234567890124"),
        None,
        None,
        Some("ANITA RAO"),
        None,
        85,
    ),
    (
        "INCOME TAX DEPARTMENT\nAAACR5055K\nName\nRELIANCE INDUSTRIES LIMITED",
        DocumentType::Pan,
        None,
        Some("AAACR5055K"),
        None,
        Some("RELIANCE INDUSTRIES LIMITED"),
        None,
        90,
    ),
    (
        "Aadhaar 2345 6789 0124 PAN ABCPE1234F",
        DocumentType::Pan,
        Some("234567890124"),
        Some("ABCPE1234F"),
        None,
        None,
        None,
        90,
    ),
    (
        "Form GST REG-06\nGSTIN 07AAACR5055K1Z0\nLegal Name: RELIANCE RETAIL LTD.\nAddress: Delhi",
        DocumentType::Gst,
        None,
        Some("AAACR5055K"),
        Some("07AAACR5055K1Z0"),
        None,
        Some("RELIANCE RETAIL LTD."),
        88,
    ),
    (
        "aadhaar 1234 5678 9012",
        DocumentType::Unknown,
        None,
        None,
        None,
        None,
        None,
        30,
    ),
];

fn assert_vector(data: &ExtractedDocumentData, v: &Vector) {
    let (text, ty, aadhaar, pan, gst, name, business, confidence) = *v;
    assert_eq!(data.document_type, ty, "type for {text:?}");
    assert_eq!(data.aadhaar_number.as_deref(), aadhaar, "aadhaar for {text:?}");
    assert_eq!(data.pan_number.as_deref(), pan, "pan for {text:?}");
    assert_eq!(data.gst_number.as_deref(), gst, "gst for {text:?}");
    assert_eq!(data.name.as_deref(), name, "name for {text:?}");
    assert_eq!(data.business_name.as_deref(), business, "business for {text:?}");
    assert_eq!(data.confidence, confidence, "confidence for {text:?}");
    assert_eq!(data.raw_text, text);
}

#[test]
fn extraction_vectors() {
    for v in VECTORS {
        let data = parse_document_text(v.0);
        assert_vector(&data, v);
    }
}

#[test]
fn reparsing_raw_text_gives_same_result() {
    for v in VECTORS {
        let first = parse_document_text(v.0);
        let second = parse_document_text(&first.raw_text);
        assert_eq!(first.document_type, second.document_type);
        assert_eq!(first.aadhaar_number, second.aadhaar_number);
        assert_eq!(first.pan_number, second.pan_number);
        assert_eq!(first.gst_number, second.gst_number);
    }
}

#[test]
fn extracted_numbers_pass_standalone_validation() {
    for v in VECTORS {
        let data = parse_document_text(v.0);
        for number in data.identity_numbers() {
            let doc = validate_document(number.as_str(), Some(number.kind())).unwrap();
            assert_eq!(doc.kind(), number.kind());
        }
    }
}

#[test]
fn ocr_verified_follows_confidence() {
    let verified: Vec<bool> = VECTORS
        .iter()
        .map(|v| parse_document_text(v.0).is_ocr_verified(DEFAULT_OCR_VERIFIED_THRESHOLD))
        .collect();
    assert_eq!(verified, vec![true, false, true, true, true, true, false]);
}

#[test]
fn json_shape_for_upload_handlers() {
    let data = parse_document_text("NAME: RAHUL SHARMA AADHAAR 1234 5678 9010");
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "RAHUL SHARMA",
            "aadhaarNumber": "123456789010",
            "documentType": "aadhaar",
            "confidence": 85,
            "rawText": "NAME: RAHUL SHARMA AADHAAR 1234 5678 9010",
        })
    );
    let back: ExtractedDocumentData = serde_json::from_value(json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn boolean_validators_reference_cases() {
    assert!(validate_aadhaar("1234 5678 9010"));
    assert!(!validate_aadhaar("1234 5678 901"));
    assert!(!validate_aadhaar("1234 5678 9010 1"));

    assert!(validate_pan("ABCDE1234F"));
    assert!(validate_pan("abcde1234f"));
    assert!(!validate_pan("ABCDE1234"));

    assert!(validate_gst("29ABCDE1234F1Z5"));
    assert!(!validate_gst("29ABCDE1234F1z5"));
}

#[test]
fn aadhaar_single_digit_errors_rejected() {
    let valid = "234567890124";
    for pos in 0..valid.len() {
        for replacement in b'0'..=b'9' {
            let mut bytes = valid.as_bytes().to_vec();
            if bytes[pos] == replacement {
                continue;
            }
            bytes[pos] = replacement;
            let typo = String::from_utf8(bytes).unwrap();
            assert!(!validate_aadhaar(&typo), "{typo} should fail");
        }
    }
}

#[test]
fn aadhaar_adjacent_transpositions_rejected() {
    let valid = "234567890124";
    for pos in 0..valid.len() - 1 {
        let mut bytes = valid.as_bytes().to_vec();
        if bytes[pos] == bytes[pos + 1] {
            continue;
        }
        bytes.swap(pos, pos + 1);
        let swapped = String::from_utf8(bytes).unwrap();
        assert!(!validate_aadhaar(&swapped), "{swapped} should fail");
    }
}

#[test]
fn detection_feeds_dispatch() {
    let doc = validate_document("07AAACR5055K1Z0", None).unwrap();
    assert_eq!(doc.kind(), DocumentKind::Gst);
}
