use self::OptionsError::*;
use serde::Deserialize;
use thiserror::Error;

/// Represents the possible connection option errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum OptionsError {
    /// Indicates the database host is missing because it has not been configured.
    #[error("a database host has not been configured")]
    MissingHost,

    /// Indicates the database or service name is missing because it has not been configured.
    #[error("a database name has not been configured")]
    MissingDatabase,

    /// Indicates the scheme of the configured URL does not name a supported driver.
    #[error("the URL scheme '{0}' does not name a supported database driver")]
    UnsupportedScheme(String),
}

/// Represents the supported database drivers.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// Indicates PostgreSQL.
    #[default]
    #[serde(alias = "Postgres", alias = "postgresql")]
    Postgres,

    /// Indicates MySQL.
    #[serde(alias = "MySql", alias = "MySQL")]
    MySql,

    /// Indicates SQLite.
    #[serde(alias = "Sqlite", alias = "SQLite")]
    Sqlite,
}

impl Driver {
    /// Gets the URL scheme of the driver.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Gets the port the database server listens on by default, if any.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::Postgres => Some(5432),
            Self::MySql => Some(3306),
            Self::Sqlite => None,
        }
    }

    /// Returns the driver for the specified URL scheme, if any.
    ///
    /// # Arguments
    ///
    /// * `scheme` - the URL scheme, without the trailing `:`
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "mysql" | "mariadb" => Some(Self::MySql),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

/// Represents the options used to connect to a database.
///
/// # Remarks
///
/// Keys may be written in `snake_case` or `PascalCase` when the options are deserialized.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConnectionOptions {
    /// Gets or sets the database [driver](Driver).
    #[serde(alias = "Driver")]
    pub driver: Driver,

    /// Gets or sets the complete connection URL, if any.
    ///
    /// # Remarks
    ///
    /// When specified, the URL is used as is and every other part is ignored.
    #[serde(alias = "Url")]
    pub url: Option<String>,

    /// Gets or sets the database host.
    #[serde(alias = "Host")]
    pub host: Option<String>,

    /// Gets or sets the database port, if it differs from the driver's [default](Driver::default_port).
    #[serde(alias = "Port")]
    pub port: Option<u16>,

    /// Gets or sets the database or service name.
    ///
    /// # Remarks
    ///
    /// For SQLite this is the file name or `:memory:`.
    #[serde(alias = "Database")]
    pub database: Option<String>,

    /// Gets or sets the user name, if any.
    #[serde(alias = "Username")]
    pub username: Option<String>,

    /// Gets or sets the password, if any.
    #[serde(alias = "Password")]
    pub password: Option<String>,
}

impl ConnectionOptions {
    /// Initializes new [`ConnectionOptions`] for a server database.
    ///
    /// # Arguments
    ///
    /// * `driver` - the database [driver](Driver)
    /// * `host` - the database host
    /// * `database` - the database or service name
    pub fn new<H, D>(driver: Driver, host: H, database: D) -> Self
    where
        H: Into<String>,
        D: Into<String>,
    {
        Self {
            driver,
            host: Some(host.into()),
            database: Some(database.into()),
            ..Default::default()
        }
    }

    /// Configures the port of the options.
    ///
    /// # Arguments
    ///
    /// * `value` - the database port
    pub fn port(mut self, value: u16) -> Self {
        self.port = Some(value);
        self
    }

    /// Configures the credentials of the options.
    ///
    /// # Arguments
    ///
    /// * `username` - the user name
    /// * `password` - the password
    ///
    /// # Remarks
    ///
    /// Credentials are written into the URL verbatim and must not contain URL delimiters.
    pub fn credentials<U, P>(mut self, username: U, password: P) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Returns the driver used to connect.
    ///
    /// # Remarks
    ///
    /// When a complete [URL](ConnectionOptions::url) is configured, the driver is determined by its scheme
    /// and the configured [driver](ConnectionOptions::driver) is ignored.
    pub fn driver(&self) -> Result<Driver, OptionsError> {
        let Some(url) = &self.url else {
            return Ok(self.driver);
        };
        let scheme = url.split_once(':').map_or(url.as_str(), |(scheme, _)| scheme);

        Driver::from_scheme(scheme).ok_or_else(|| UnsupportedScheme(scheme.into()))
    }

    /// Returns the connection URL represented by the options.
    pub fn url(&self) -> Result<String, OptionsError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        let database = self
            .database
            .as_deref()
            .filter(|db| !db.is_empty())
            .ok_or(MissingDatabase)?;
        let scheme = self.driver.scheme();

        if self.driver == Driver::Sqlite {
            return Ok(format!("{scheme}:{database}"));
        }

        let host = self
            .host
            .as_deref()
            .filter(|host| !host.is_empty())
            .ok_or(MissingHost)?;
        let mut url = format!("{scheme}://");

        if let Some(username) = &self.username {
            url.push_str(username);

            if let Some(password) = &self.password {
                url.push(':');
                url.push_str(password);
            }

            url.push('@');
        }

        url.push_str(host);

        if let Some(port) = self.port.or(self.driver.default_port()) {
            url.push(':');
            url.push_str(&port.to_string());
        }

        url.push('/');
        url.push_str(database);

        Ok(url)
    }
}
