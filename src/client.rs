//! Client entry point.

use crate::{
    config::ClientConfig,
    error::Result,
    services::{Accounts, Cards, Charges, Customers, Tokens, Transactions, Transfers},
    transport::{HttpTransport, Transport},
};

/// Entry point for all Opal Payments operations.
///
/// The client owns a [`Transport`] and hands out per-resource service
/// handles that borrow it. It holds no other state: every operation is a
/// single request/response cycle and request/response models are
/// call-scoped, so a client can be shared freely across tasks.
///
/// # Examples
///
/// ```no_run
/// use opalpay::{Client, ClientConfig, models::ChargeCreateInfo};
///
/// # async fn example() -> opalpay::Result<()> {
/// let client = Client::new(&ClientConfig::new("skey_test_123", "pkey_test_123"))?;
///
/// let info = ChargeCreateInfo::with_customer(
///     100_000,
///     "thb",
///     "https://merchant.example/done",
///     "cust_test_123",
/// );
/// let charge = client.charges().create(&info).await?;
/// println!("charged: {}", charge.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Builds a client over the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the
    /// configuration fails validation.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self { transport: HttpTransport::new(config)? })
    }

    /// Builds a client from `OPALPAY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if a required
    /// variable is missing or the configuration fails validation.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }
}

impl<T: Transport> Client<T> {
    /// Wraps a caller-provided transport.
    ///
    /// This is the injection point for custom HTTP stacks and for test
    /// doubles that stub responses without a network.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The transport this client issues requests through.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Charge operations.
    #[must_use]
    pub fn charges(&self) -> Charges<'_, T> {
        Charges::new(&self.transport)
    }

    /// Customer operations.
    #[must_use]
    pub fn customers(&self) -> Customers<'_, T> {
        Customers::new(&self.transport)
    }

    /// Card operations.
    #[must_use]
    pub fn cards(&self) -> Cards<'_, T> {
        Cards::new(&self.transport)
    }

    /// Token operations.
    #[must_use]
    pub fn tokens(&self) -> Tokens<'_, T> {
        Tokens::new(&self.transport)
    }

    /// Transaction operations.
    #[must_use]
    pub fn transactions(&self) -> Transactions<'_, T> {
        Transactions::new(&self.transport)
    }

    /// Transfer operations.
    #[must_use]
    pub fn transfers(&self) -> Transfers<'_, T> {
        Transfers::new(&self.transport)
    }

    /// Account and balance operations.
    #[must_use]
    pub fn account(&self) -> Accounts<'_, T> {
        Accounts::new(&self.transport)
    }
}
