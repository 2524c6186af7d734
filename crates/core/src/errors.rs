use thiserror::Error;

/// Resolving the selected client from a fetched listing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no client named `{name}` in the fetched list")]
    NotFound { name: String },
    #[error("{count} clients share the name `{name}`; select by id instead")]
    Ambiguous { name: String, count: usize },
    #[error("no client is selected")]
    NoneSelected,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("email and password are both required")]
    BlankCredentials,
    #[error("login was rejected by the API (status {status:?})")]
    Rejected { status: Option<u16> },
}

/// Line-item store mutation failures. An out-of-bounds index means the
/// caller edited a row that is no longer rendered.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("line item index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("unit price must not be negative")]
    NegativePrice,
}

/// Failure taxonomy for one user-triggered action. A transport failure and
/// an application-level non-success status are deliberately the same
/// outcome: `status` is `None` when the host was unreachable. Nothing here
/// is fatal to the process; every failure leaves the session usable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("could not load the client list (status {status:?})")]
    Fetch { status: Option<u16> },
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("quote submission was not accepted (status {status:?})")]
    Submit { status: Option<u16> },
    #[error("client registration was not accepted (status {status:?})")]
    ClientCreate { status: Option<u16> },
    #[error("client deletion was not accepted (status {status:?})")]
    ClientDelete { status: Option<u16> },
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl ActionError {
    /// Notice text shown to the user, matching the original screens.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "Erro ao carregar a lista de clientes",
            Self::Auth(AuthError::BlankCredentials) => "Preencha todos os campos",
            Self::Auth(AuthError::Rejected { .. }) => "Usuário ou senha inválidos",
            Self::Submit { .. } => "Erro ao criar o orçamento. Tente novamente.",
            Self::ClientCreate { .. } => "Erro ao cadastrar cliente",
            Self::ClientDelete { .. } => "Ação não permitida para este cliente",
            Self::Selection(SelectionError::NoneSelected) => {
                "Selecione um cliente antes de criar o orçamento"
            }
            Self::Selection(_) => "Cliente não encontrado",
        }
    }
}
