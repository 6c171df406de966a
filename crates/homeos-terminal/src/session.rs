//! Per-terminal session state and prompt rendering.

use homeos_vfs::{DirId, Namespace};

/// Identity and location of one terminal instance.
///
/// `user` and `host` are fixed for the session lifetime; the current
/// directory is mutated only by the `cd` handler. The home directory must
/// exist in the namespace when the session is created and is never removed
/// (only empty, non-current directories can be removed at all).
#[derive(Debug)]
pub struct Session {
    user: String,
    host: String,
    current: DirId,
    home: DirId,
}

impl Session {
    /// Create a session starting in `home`.
    pub fn new(user: &str, host: &str, home: DirId) -> Self {
        Self {
            user: user.to_string(),
            host: host.to_string(),
            current: home,
            home,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn current_dir(&self) -> DirId {
        self.current
    }

    pub fn home_dir(&self) -> DirId {
        self.home
    }

    /// Move the session to `dir`. Callers must pass an id that is live in
    /// the namespace; `cd` only ever passes ids it just resolved.
    pub fn set_current_dir(&mut self, dir: DirId) {
        self.current = dir;
    }

    /// Render the bash-style prompt: `<user>@<host>:<path>$ ` where
    /// `<path>` is `~` at home and `/~<dirname>` anywhere else.
    ///
    /// The prompt is recomputed on every render so namespace mutations show
    /// up immediately.
    pub fn prompt(&self, ns: &Namespace) -> String {
        let path = if self.current == self.home {
            "~".to_string()
        } else {
            format!("/~{}", ns.name(self.current))
        };
        format!("{}@{}:{path}$ ", self.user, self.host)
    }
}
