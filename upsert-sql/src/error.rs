use upsert::UpsertError;

pub(crate) trait UpsertErr<T> {
    fn upsert_err(self) -> Result<T, UpsertError>;
}

impl<T> UpsertErr<T> for Result<T, sqlx::Error> {
    fn upsert_err(self) -> Result<T, UpsertError> {
        self.map_err(classify)
    }
}

fn classify(error: sqlx::Error) -> UpsertError {
    use sqlx::Error::*;

    match error {
        Configuration(_) | Io(_) | Tls(_) | Protocol(_) | PoolTimedOut | PoolClosed
        | WorkerCrashed => UpsertError::Connection(Box::new(error)),
        _ => UpsertError::Statement(Box::new(error)),
    }
}
