use crate::{Column, Record};

/// Represents a country of the HR schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Country {
    country_id: String,
    region_id: i32,
    country_name: String,
}

impl Country {
    /// Initializes a new [`Country`].
    ///
    /// # Arguments
    ///
    /// * `country_id` - the country code, such as an ISO code
    /// * `region_id` - the identifier of the region the country belongs to
    /// * `country_name` - the country name
    pub fn new<I, N>(country_id: I, region_id: i32, country_name: N) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            country_id: country_id.into(),
            region_id,
            country_name: country_name.into(),
        }
    }

    /// Gets the country code.
    pub fn country_id(&self) -> &str {
        &self.country_id
    }

    /// Gets the region identifier.
    pub fn region_id(&self) -> i32 {
        self.region_id
    }

    /// Gets the country name.
    pub fn country_name(&self) -> &str {
        &self.country_name
    }
}

impl Record for Country {
    const TABLE: &'static str = "countries";
    const KEY: &'static str = "country_id";

    fn key(&self) -> &str {
        &self.country_id
    }

    fn attributes(&self) -> Vec<Column> {
        vec![
            Column::new("country_name", self.country_name.as_str()),
            Column::new("region_id", self.region_id),
        ]
    }
}

/// Represents a job of the HR schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    job_id: String,
    job_title: String,
    min_salary: i32,
    max_salary: i32,
}

impl Job {
    /// Initializes a new [`Job`].
    ///
    /// # Arguments
    ///
    /// * `job_id` - the job code
    /// * `job_title` - the job title
    /// * `min_salary` - the minimum salary of the job
    /// * `max_salary` - the maximum salary of the job
    pub fn new<I, T>(job_id: I, job_title: T, min_salary: i32, max_salary: i32) -> Self
    where
        I: Into<String>,
        T: Into<String>,
    {
        Self {
            job_id: job_id.into(),
            job_title: job_title.into(),
            min_salary,
            max_salary,
        }
    }

    /// Gets the job code.
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Gets the job title.
    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    /// Gets the minimum salary.
    pub fn min_salary(&self) -> i32 {
        self.min_salary
    }

    /// Gets the maximum salary.
    pub fn max_salary(&self) -> i32 {
        self.max_salary
    }
}

impl Record for Job {
    const TABLE: &'static str = "jobs";
    const KEY: &'static str = "job_id";

    fn key(&self) -> &str {
        &self.job_id
    }

    fn attributes(&self) -> Vec<Column> {
        vec![
            Column::new("job_title", self.job_title.as_str()),
            Column::new("min_salary", self.min_salary),
            Column::new("max_salary", self.max_salary),
        ]
    }
}
