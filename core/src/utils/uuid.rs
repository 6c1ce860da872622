use uuid::Uuid;

/// Generate a random UUID v4 string
pub(crate) fn generate_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::generate_uuid;

    #[test]
    fn test_generate_uuid() {
        let result = generate_uuid();
        assert_eq!(result.len(), 36);
        assert_ne!(result, generate_uuid());
    }
}
