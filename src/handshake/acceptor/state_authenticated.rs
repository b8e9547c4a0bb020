use super::Acceptor;
use crate::crypto::keys::SessionKey;
use crate::protocol::state::Authenticated;

impl Acceptor<Authenticated> {
    /// The secret agreed with the authenticated initiator.
    ///
    /// 与已认证发起方协商出的密钥。
    pub fn secret(&self) -> &SessionKey {
        &self.state.key
    }

    /// Consumes the session, keeping only the agreed secret.
    pub fn into_secret(self) -> SessionKey {
        self.state.key
    }
}
