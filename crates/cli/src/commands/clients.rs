use clap::{Args, Subcommand};

use orcalite_api::ApiGateway;
use orcalite_core::config::AppConfig;
use orcalite_core::{Client, ClientDraft, ClientId};

use super::surface;

#[derive(Debug, Subcommand)]
pub enum ClientsCommand {
    #[command(about = "Fetch and render the client list")]
    List,
    #[command(about = "Register a new client")]
    Add(AddArgs),
    #[command(about = "Delete a client by id")]
    Remove {
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub nome: String,
    #[arg(long, help = "CNPJ/CPF")]
    pub cgc: String,
    #[arg(long, default_value = "")]
    pub telefone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub endereco: String,
    #[arg(long, default_value = "")]
    pub numero: String,
    #[arg(long, default_value = "")]
    pub bairro: String,
    #[arg(long, default_value = "")]
    pub cidade: String,
    #[arg(long, help = "Id of the authenticated user (see `orcalite login`)")]
    pub user_id: String,
}

pub async fn run(config: &AppConfig, command: ClientsCommand) -> anyhow::Result<()> {
    let gateway = ApiGateway::new(config.api.clone());

    match command {
        ClientsCommand::List => {
            let clients = gateway.list_clients().await.map_err(surface)?;
            render(&clients);
            Ok(())
        }
        ClientsCommand::Add(args) => {
            let draft = ClientDraft {
                nome: args.nome,
                cgc: args.cgc,
                telefone: args.telefone,
                email: args.email,
                endereco: args.endereco,
                numero: args.numero,
                bairro: args.bairro,
                cidade: args.cidade,
                usuario_id: args.user_id,
            };
            gateway.create_client(&draft).await.map_err(surface)?;
            println!("Cliente cadastrado com sucesso");
            Ok(())
        }
        ClientsCommand::Remove { id } => {
            gateway.delete_client(&ClientId(id)).await.map_err(surface)?;
            println!("Cliente excluído com sucesso");
            Ok(())
        }
    }
}

pub(crate) fn render(clients: &[Client]) {
    if clients.is_empty() {
        println!("(nenhum cliente)");
        return;
    }

    println!("{:<6} {:<24} {:<20} {:<16} {}", "id", "nome", "cgc", "telefone", "email");
    for client in clients {
        println!(
            "{:<6} {:<24} {:<20} {:<16} {}",
            client.id, client.nome, client.cgc, client.telefone, client.email
        );
    }
}
