use rand::rngs::OsRng;
use rand::RngCore;

/// Generates a random 256-bit signing secret, hex encoded.
///
/// Pass the output to the server through the `JWT__SECRET` environment
/// variable or the `jwt.secret` config key.
fn main() {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    println!("{}", hex::encode(secret));
}
