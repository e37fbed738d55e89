//! Prove once and print the key, input, proof and output as JSON.

use log::info;
use relief_ecvrf::{ser::to_prefixed_hex, Keypair, SecretKey};
use serde_json::json;
use structopt::StructOpt;
use zeroize::Zeroizing;

#[derive(StructOpt)]
#[structopt(about = "Produce an ECVRF-EDWARDS25519-SHA512-TAI proof for an input string.")]
struct Opts {
    #[structopt(long = "alpha", help = "Input string to prove.")]
    alpha:      String,
    #[structopt(
        long = "secret-key",
        help = "Hex-encoded 32-byte secret key. A fresh key is generated if absent."
    )]
    secret_key: Option<String>,
    #[structopt(long = "pretty", help = "Pretty-print the JSON output.")]
    pretty:     bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts = Opts::from_args();

    let keypair = match opts.secret_key {
        Some(hex) => {
            let hex = Zeroizing::new(hex);
            Keypair::from_secret(SecretKey::from_hex(&hex)?)
        }
        None => {
            info!("no secret key given, generating a fresh one");
            Keypair::generate()?
        }
    };

    let alpha = opts.alpha.as_bytes();
    let (proof, output) = keypair.prove(alpha)?;
    let checked = keypair.public.verify(alpha, &proof.0)?;
    if !checked.ct_eq(&output) {
        return Err("proof does not reproduce its own output".into());
    }

    let value = json!({
        "publicKey": to_prefixed_hex(&keypair.public_key_bytes()),
        "inputString": opts.alpha,
        "proof": to_prefixed_hex(&proof.0),
        "vrfOutput": to_prefixed_hex(&output.0),
    });
    let rendered = if opts.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");
    Ok(())
}
