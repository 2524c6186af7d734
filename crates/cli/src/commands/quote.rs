use std::str::FromStr;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use orcalite_api::{submit_quote, ApiGateway};
use orcalite_core::config::AppConfig;
use orcalite_core::{ActionError, ClientDirectory, ClientId, ItemField, Session};

use super::surface;

#[derive(Debug, Subcommand)]
pub enum QuoteCommand {
    #[command(about = "Compose line items and submit a quote for the selected client")]
    New(NewArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(long, help = "Id of the client the quote is for")]
    pub client_id: Option<String>,
    #[arg(long, conflicts_with = "client_id", help = "Display name of the client (must be unique)")]
    pub client_name: Option<String>,
    #[arg(
        long = "item",
        value_name = "QTY:PRICE:DESCRIPTION",
        help = "Line item; repeat the flag for more rows"
    )]
    pub items: Vec<ItemSpec>,
}

/// One `--item` flag: quantity, unit price, and description separated by
/// colons. The description comes last so it may itself contain colons.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSpec {
    pub quantidade: u32,
    pub preco_unitario: Decimal,
    pub descricao: String,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(3, ':');
        let quantidade = parts
            .next()
            .unwrap_or_default()
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("`{value}`: quantity must be an integer"))?;
        if quantidade == 0 {
            return Err(format!("`{value}`: quantity must be at least 1"));
        }

        let preco_unitario = parts
            .next()
            .ok_or_else(|| format!("`{value}`: expected QTY:PRICE:DESCRIPTION"))?
            .trim()
            .parse::<Decimal>()
            .map_err(|_| format!("`{value}`: price must be a decimal number"))?;
        if preco_unitario < Decimal::ZERO {
            return Err(format!("`{value}`: price must not be negative"));
        }

        let descricao = parts
            .next()
            .ok_or_else(|| format!("`{value}`: expected QTY:PRICE:DESCRIPTION"))?
            .to_string();

        Ok(Self { quantidade, preco_unitario, descricao })
    }
}

pub async fn run(config: &AppConfig, command: QuoteCommand) -> anyhow::Result<()> {
    let QuoteCommand::New(args) = command;
    let gateway = ApiGateway::new(config.api.clone());

    // Client Selector: the selection context comes from a fresh listing.
    let clients = gateway.list_clients().await.map_err(surface)?;
    let directory = ClientDirectory::new(clients);

    let selected: Option<ClientId> = match (&args.client_id, &args.client_name) {
        (Some(id), _) => {
            let id = ClientId(id.clone());
            match directory.by_id(&id) {
                Some(client) => Some(client.id.clone()),
                None => {
                    return Err(surface(ActionError::from(
                        orcalite_core::SelectionError::NotFound { name: id.0 },
                    )))
                }
            }
        }
        (None, Some(name)) => {
            let client = directory.by_name(name).map_err(|e| surface(e.into()))?;
            Some(client.id.clone())
        }
        (None, None) => None,
    };

    // Line-Item Store: one rendered row per --item flag.
    let mut session = Session::new();
    for (index, spec) in args.items.iter().enumerate() {
        session.items.add();
        session.items.update(index, ItemField::Quantity(spec.quantidade))?;
        session.items.update(index, ItemField::Description(spec.descricao.clone()))?;
        session.items.update(index, ItemField::UnitPrice(spec.preco_unitario))?;
    }

    let report = submit_quote(&gateway, &mut session, selected.as_ref())
        .await
        .map_err(|e| surface(e.into()))?;

    let failed = match &report.outcome {
        Ok(quote) => {
            println!("Orçamento criado com sucesso!");
            println!("  número: {}", quote.num_orc);
            println!("  total: {}", quote.valor_total);
            false
        }
        Err(error) => {
            eprintln!("{}", error.user_message());
            true
        }
    };
    if report.store_cleared {
        tracing::debug!("line-item store cleared");
    }

    // Fixed pause, then the view refresh: re-fetch and re-render the
    // client list the way the page reloads after a submission.
    tokio::time::sleep(report.refresh_after).await;
    match gateway.list_clients().await {
        Ok(clients) => super::clients::render(&clients),
        Err(error) => eprintln!("{}", error.user_message()),
    }

    if failed {
        anyhow::bail!("Erro ao criar o orçamento. Tente novamente.");
    }
    Ok(())
}
