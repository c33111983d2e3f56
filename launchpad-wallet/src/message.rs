//! Sign-in message construction
//!
//! Builds the EIP-4361 (Sign-In with Ethereum) and SIWS (Sign-In with
//! Solana) message texts that the wallet adapters sign during the auth
//! flow. Only the text layout lives here; signing is the adapter's job.

/// Fields embedded in a sign-in message
#[derive(Debug, Clone)]
pub struct SignInFields {
    pub domain: String,
    pub address: String,
    pub statement: String,
    pub uri: String,
    pub chain_id: String,
    pub nonce: String,
    /// RFC3339 timestamp
    pub issued_at: String,
    /// RFC3339 timestamp; SIWS messages carry one, SIWE messages do not
    pub expiration_time: Option<String>,
}

/// EIP-4361 message text
pub fn siwe_message(fields: &SignInFields) -> String {
    sign_in_text("Ethereum", fields)
}

/// SIWS message text (same layout over a Solana account)
pub fn siws_message(fields: &SignInFields) -> String {
    sign_in_text("Solana", fields)
}

fn sign_in_text(account_kind: &str, fields: &SignInFields) -> String {
    let mut text = format!(
        "{domain} wants you to sign in with your {kind} account:\n\
         {address}\n\
         \n\
         {statement}\n\
         \n\
         URI: {uri}\n\
         Version: 1\n\
         Chain ID: {chain_id}\n\
         Nonce: {nonce}\n\
         Issued At: {issued_at}",
        domain = fields.domain,
        kind = account_kind,
        address = fields.address,
        statement = fields.statement,
        uri = fields.uri,
        chain_id = fields.chain_id,
        nonce = fields.nonce,
        issued_at = fields.issued_at,
    );

    if let Some(expiration) = &fields.expiration_time {
        text.push_str(&format!("\nExpiration Time: {}", expiration));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> SignInFields {
        SignInFields {
            domain: "api.launchpad.example.com".to_string(),
            address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
            statement: "Sign in with Ethereum to the app".to_string(),
            uri: "https://api.launchpad.example.com".to_string(),
            chain_id: "97".to_string(),
            nonce: "482916".to_string(),
            issued_at: "2025-01-01T00:00:00.000Z".to_string(),
            expiration_time: None,
        }
    }

    #[test]
    fn test_siwe_layout() {
        let text = siwe_message(&fields());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "api.launchpad.example.com wants you to sign in with your Ethereum account:"
        );
        assert_eq!(lines[1], "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Sign in with Ethereum to the app");
        assert!(text.contains("URI: https://api.launchpad.example.com"));
        assert!(text.contains("Version: 1"));
        assert!(text.contains("Chain ID: 97"));
        assert!(text.contains("Nonce: 482916"));
        assert!(text.contains("Issued At: 2025-01-01T00:00:00.000Z"));
        assert!(!text.contains("Expiration Time"));
    }

    #[test]
    fn test_siws_carries_expiration() {
        let mut f = fields();
        f.expiration_time = Some("2025-01-31T00:00:00.000Z".to_string());
        let text = siws_message(&f);

        assert!(text.starts_with(
            "api.launchpad.example.com wants you to sign in with your Solana account:"
        ));
        assert!(text.ends_with("Expiration Time: 2025-01-31T00:00:00.000Z"));
    }
}
