use urlify::{padded_buffer, urlify, urlify_in_place, urlify_unpadded, UrlifyError};

#[test]
fn test_encode_sample_sentence() {
    let text = "Mr John Smith               ";
    let mut buffer: Vec<char> = text.chars().collect();

    let encoded: String = urlify_in_place(&mut buffer, 13).unwrap().iter().collect();

    assert_eq!(encoded, "Mr%20John%20Smith");
    assert_eq!(urlify(text, 13).unwrap(), encoded);
    assert_eq!(urlify_unpadded("Mr John Smith", 13).unwrap(), encoded);
}

#[test]
fn test_encode_padded_buffer() {
    let content = "to be or not to be";
    let mut buffer = padded_buffer(content);

    let encoded = urlify_in_place(&mut buffer, content.chars().count()).unwrap();

    assert_eq!(
        encoded.iter().collect::<String>(),
        "to%20be%20or%20not%20to%20be"
    );
}

#[test]
fn test_precondition_failures_are_reported() {
    assert_eq!(
        urlify("abc", 10).unwrap_err(),
        UrlifyError::InvalidLength {
            length: 10,
            capacity: 3
        }
    );
    assert_eq!(
        urlify("a b", 3).unwrap_err(),
        UrlifyError::InsufficientCapacity {
            needed: 5,
            available: 3
        }
    );
    assert_eq!(
        urlify("a b", 3).unwrap_err().to_string(),
        "encoded text needs 5 chars but the buffer only holds 3"
    );
}
