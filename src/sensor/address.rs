/// Separator between a service id and an address inside that service
pub const ADDRESS_SEPARATOR: char = '&';

/// Combine a service id and an in-service address into one global address
pub fn join_addresses(service_id: &str, address: &str) -> String {
    format!("{}{}{}", service_id, ADDRESS_SEPARATOR, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_addresses() {
        assert_eq!(join_addresses("com.example/svc", "s1"), "com.example/svc&s1");
        assert_eq!(join_addresses("svc", ""), "svc&");
    }
}
