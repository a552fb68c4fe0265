#![allow(dead_code)]

pub const CREATE_COUNTRIES: &str = concat!(
    "CREATE TABLE countries (",
    "country_id VARCHAR(10) NOT NULL PRIMARY KEY, ",
    "country_name VARCHAR(40), ",
    "region_id INTEGER",
    ")"
);

pub const CREATE_JOBS: &str = concat!(
    "CREATE TABLE jobs (",
    "job_id VARCHAR(10) NOT NULL PRIMARY KEY, ",
    "job_title VARCHAR(35) NOT NULL, ",
    "min_salary INTEGER, ",
    "max_salary INTEGER",
    ")"
);

pub const SELECT_COUNTRIES: &str =
    "SELECT country_id, country_name, region_id FROM countries ORDER BY country_id";

pub const SELECT_JOBS: &str =
    "SELECT job_id, job_title, min_salary, max_salary FROM jobs ORDER BY job_id";

pub type CountryRow = (String, String, i32);

pub type JobRow = (String, String, i32, i32);

pub fn country(id: &str, name: &str, region_id: i32) -> CountryRow {
    (id.into(), name.into(), region_id)
}

pub fn job(id: &str, title: &str, min_salary: i32, max_salary: i32) -> JobRow {
    (id.into(), title.into(), min_salary, max_salary)
}
