//! Server port and protocol grammar

/// Check a server port of the form `8080`, `8080/tcp` or `53/udp`
///
/// The numeric part must not start with zero.
pub fn is_valid_server_port(port: &str) -> bool {
    let number = match port.split_once('/') {
        Some((number, "tcp" | "udp")) => number,
        Some(_) => return false,
        None => port,
    };

    number.bytes().next().is_some_and(|b| matches!(b, b'1'..=b'9'))
        && number.bytes().all(|b| b.is_ascii_digit())
}

/// Check a server protocol such as `http`, `ws` or `svn+ssh`
///
/// Lowercase latin letter first, then lowercase letters, digits, `+`, `-` or `.`.
pub fn is_valid_server_protocol(protocol: &str) -> bool {
    let mut bytes = protocol.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_lowercase())
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.'))
}
