use clap::Args;
use secrecy::SecretString;

use orcalite_api::ApiGateway;
use orcalite_core::config::AppConfig;

use super::surface;

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password. Prefer the environment variable over the flag so the
    /// secret stays out of shell history.
    #[arg(long, env = "ORCALITE_SENHA", hide_env_values = true)]
    pub senha: String,
}

/// Verifies credentials and prints the user record. Sessions are not
/// persisted across invocations, so the printed id is what later commands
/// take via `--user-id`.
pub async fn run(config: &AppConfig, args: LoginArgs) -> anyhow::Result<()> {
    let gateway = ApiGateway::new(config.api.clone());
    let senha = SecretString::from(args.senha);

    let user = gateway.login(&args.email, &senha).await.map_err(surface)?;

    println!("Login efetuado com sucesso");
    println!("  usuário: {} <{}>", user.nome, user.email);
    println!("  id: {}", user.id);
    Ok(())
}
