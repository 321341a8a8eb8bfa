//! Render capabilities for the listing page
//!
//! A renderer turns a URL into a DOM document string. The listing page is
//! server-rendered, so a plain GET is the default; the headless browser
//! path exists for when the markup needs script execution first.

use crate::TrendingError;
use async_trait::async_trait;
use reqwest::Client;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;
use url::Url;

/// Executable names searched on `PATH`, in preference order
const CHROME_EXECUTABLES: [&str; 4] = ["google-chrome", "chromium", "chromium-browser", "chrome"];

/// Virtual time granted to page scripts before the DOM is dumped (ms)
const VIRTUAL_TIME_BUDGET_MS: u64 = 5000;

/// Produces the rendered document for a URL
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Renders `url` and returns the resulting DOM as HTML
    ///
    /// Any failure is reported as `TrendingError::Render`.
    async fn render(&self, url: &Url) -> Result<String, TrendingError>;
}

fn render_error(url: &Url, message: impl Into<String>) -> TrendingError {
    TrendingError::Render {
        url: url.to_string(),
        message: message.into(),
    }
}

/// Fetches the page over plain HTTP
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn render(&self, url: &Url) -> Result<String, TrendingError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "text/html")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    render_error(url, "Request timeout")
                } else if e.is_connect() {
                    render_error(url, "Connection refused")
                } else {
                    render_error(url, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(render_error(url, format!("HTTP status {}", status)));
        }

        response.text().await.map_err(|e| render_error(url, e.to_string()))
    }
}

/// Renders the page in a headless Chrome/Chromium and dumps the DOM
pub struct ChromeRenderer {
    executable: PathBuf,
    timeout: Duration,
}

impl ChromeRenderer {
    /// Locates a Chrome/Chromium executable on `PATH`
    pub fn discover(timeout: Duration) -> Result<Self, TrendingError> {
        let search_path = std::env::var_os("PATH").ok_or(TrendingError::BrowserNotFound)?;
        Self::discover_in(search_path, timeout)
    }

    /// Locates a Chrome/Chromium executable in the given search path
    ///
    /// `search_path` uses the platform's `PATH` syntax.
    pub fn discover_in(
        search_path: impl AsRef<OsStr>,
        timeout: Duration,
    ) -> Result<Self, TrendingError> {
        for exe in CHROME_EXECUTABLES {
            if let Ok(executable) = which::which_in(exe, Some(search_path.as_ref()), ".") {
                tracing::debug!("Using browser at {}", executable.display());
                return Ok(Self::with_executable(executable, timeout));
            }
        }

        Err(TrendingError::BrowserNotFound)
    }

    pub fn with_executable(executable: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            executable: executable.into(),
            timeout,
        }
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &Url) -> Result<String, TrendingError> {
        let budget = format!("--virtual-time-budget={}", VIRTUAL_TIME_BUDGET_MS);
        let mut command = Command::new(&self.executable);
        command
            .args(["--headless=new", "--disable-gpu", "--no-sandbox"])
            .arg(budget)
            .arg("--dump-dom")
            .arg(url.as_str())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| render_error(url, format!("Browser timed out after {:?}", self.timeout)))?
            .map_err(|e| render_error(url, format!("Failed to launch browser: {}", e)))?;

        if !output.status.success() {
            let code = output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |c| c.to_string());
            return Err(render_error(url, format!("Browser exited with code: {}", code)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
