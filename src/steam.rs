use crate::session::SessionClient;
use steamworks::{Client, SingleClient};

/// The real Steamworks-backed client. Holds the SDK connection between
/// `connect` and `shutdown`; dropping the `Client` releases it.
pub struct SteamSession {
    id: u32,
    client: Option<Client>,
    single: Option<SingleClient>,
}

impl SteamSession {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            client: None,
            single: None,
        }
    }
}

impl SessionClient for SteamSession {
    fn connect(&mut self) -> bool {
        match Client::init_app(self.id) {
            Ok((client, single)) => {
                self.client = Some(client);
                self.single = Some(single);
                true
            }
            Err(_) => false,
        }
    }

    fn logged_on(&self) -> bool {
        match &self.client {
            Some(client) => client.user().logged_on(),
            None => false,
        }
    }

    fn persona_name(&self) -> String {
        match &self.client {
            Some(client) => client.friends().name(),
            None => String::new(),
        }
    }

    fn request_current_stats(&self) -> bool {
        match &self.client {
            Some(client) => {
                client.user_stats().request_current_stats();
                true
            }
            None => false,
        }
    }

    fn achievement_unlocked(&self, id: &str) -> bool {
        match &self.client {
            Some(client) => client
                .user_stats()
                .achievement(id)
                .get()
                .unwrap_or(false),
            None => false,
        }
    }

    fn unlock_achievement(&self, id: &str) -> bool {
        match &self.client {
            Some(client) => client.user_stats().achievement(id).set().is_ok(),
            None => false,
        }
    }

    fn store_stats(&self) -> bool {
        match &self.client {
            Some(client) => client.user_stats().store_stats().is_ok(),
            None => false,
        }
    }

    fn shutdown(&mut self) {
        self.client.take();
        self.single.take();
    }
}
