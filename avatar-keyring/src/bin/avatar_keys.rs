use anyhow::{bail, Context};
use avatar_keyring::{SecretConfig, SecretManager};
use std::env;

const USAGE: &str = "Usage: avatar-keys <command>

Commands:
  create                  Generate a new mnemonic and write the secret file
  restore <word>...       Re-derive every key from an existing mnemonic
  rotate <stellar-secret> Replace the Stellar key, keeping the old one in history
  show                    Print the public keys (never the secret ones)
  path                    Print the secret file location";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    avatar_keyring::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!("{}", USAGE);
    };

    let config = SecretConfig::from_env().context("Failed to resolve the secret file location")?;

    match command.as_str() {
        "create" => {
            let manager = SecretManager::new(config);
            let record = manager.create().await.context("Failed to create secret keys")?;
            println!("Secret keys written to {}", manager.secret_file().display());
            println!("Your public name: {}", record.id().unwrap_or_default());
            println!("Your mnemonic is stored in the secret file. Back it up somewhere safe.");
        }
        "restore" => {
            if args.len() < 2 {
                bail!("restore needs the mnemonic words\n\n{}", USAGE);
            }
            let words = args[1..].join(" ");
            let manager = SecretManager::new(config);
            let record = manager.from_mnemonic(&words).await.context("Failed to restore secret keys")?;
            println!("Secret keys restored to {}", manager.secret_file().display());
            println!("Your public name: {}", record.id().unwrap_or_default());
        }
        "rotate" => {
            let Some(secret) = args.get(1) else {
                bail!("rotate needs a Stellar secret key\n\n{}", USAGE);
            };
            let manager = SecretManager::new(config);
            let record = manager.update_wallet_key(secret).await.context("Failed to rotate Stellar key")?;
            if let Some(stellar) = &record.stellar {
                println!("Stellar key is now {}", stellar.public_key);
                println!("Retired Stellar keys: {}", stellar.history().len());
            }
        }
        "show" => {
            let manager = SecretManager::new(config);
            let keys = manager.public_keys().await.context("Failed to read the secret file")?;
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        "path" => {
            println!("{}", config.secret_file().display());
        }
        other => bail!("Unknown command: {}\n\n{}", other, USAGE),
    }

    Ok(())
}
