use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Fixed server settings. The demo takes no flags and reads no config files.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub title: &'static str,
    /// Hero image location, relative to the program directory.
    pub hero_image: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 7873,
            title: "Public Dataset Streaming TTS WebUI",
            hero_image: "images/tts_075b_hf_page.png",
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Directories searched for assets: next to the executable, then the crate root.
    pub fn asset_roots(&self) -> Vec<PathBuf> {
        let mut roots = Vec::new();

        if let Some(dir) = std::env::current_exe()
            .ok()
            .as_deref()
            .and_then(Path::parent)
        {
            roots.push(dir.to_path_buf());
        }

        roots.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        roots
    }
}
