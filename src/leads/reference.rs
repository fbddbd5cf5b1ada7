// src/leads/reference.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const REFERENCE_BYTES: usize = 6;

/// Inquiry reference shown to the visitor, e.g. `JIA-3q2-Xz_Ab`.
pub fn generate_reference_default() -> String {
    let mut rng = OsRng;
    generate_reference(&mut rng)
}

pub fn generate_reference<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; REFERENCE_BYTES];
    rng.fill_bytes(&mut buf);
    format!("JIA-{}", base64_url_nopad(&buf))
}

/// Short SHA-256 fingerprint of an email address, so log lines can be
/// correlated without recording the address itself.
pub fn email_fingerprint(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    let out = hasher.finalize();
    out[..8].iter().map(|b| format!("{b:02x}")).collect()
}

fn base64_url_nopad(bytes: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
