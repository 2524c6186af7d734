use serde::{Deserialize, Serialize};

use crate::errors::SelectionError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub String);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only, session-scoped copy of a client record as returned by
/// `GET /Cliente/listar`. Field names follow the wire format; fields the
/// listing may omit default to empty strings, and unknown response fields
/// are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub nome: String,
    #[serde(default)]
    pub cgc: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub endereco: String,
}

/// Registration payload for `POST /cliente/criar`. The creating user's id
/// travels with the draft; the server mints the client id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClientDraft {
    pub nome: String,
    pub cgc: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    #[serde(rename = "usuarioId")]
    pub usuario_id: String,
}

/// One page-load's worth of clients, resolved by identifier. Display names
/// are labels, not keys: `by_name` exists for the name-driven picker flow
/// and fails loudly when a name is shared by more than one client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientDirectory {
    clients: Vec<Client>,
}

impl ClientDirectory {
    pub fn new(clients: Vec<Client>) -> Self {
        Self { clients }
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn by_id(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| &client.id == id)
    }

    pub fn by_name(&self, name: &str) -> Result<&Client, SelectionError> {
        let mut matches = self.clients.iter().filter(|client| client.nome == name);
        let first = matches
            .next()
            .ok_or_else(|| SelectionError::NotFound { name: name.to_string() })?;
        let extra = matches.count();
        if extra > 0 {
            return Err(SelectionError::Ambiguous { name: name.to_string(), count: extra + 1 });
        }
        Ok(first)
    }
}
