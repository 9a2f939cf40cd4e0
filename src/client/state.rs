use std::fmt::Display;

/// Identifies one issued fetch. Only the most recent token may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request superseded this one, or it was already resolved.
    Stale,
}

/// Fetch lifecycle for one view: parameter changes call [`Loader::begin`],
/// responses come back through [`Loader::resolve`] with their token.
#[derive(Debug)]
pub struct Loader<T> {
    state: FetchState<T>,
    issued: u64,
    pending: Option<u64>,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Loader {
            state: FetchState::Idle,
            issued: 0,
            pending: None,
        }
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Starts a new fetch. Any response for an earlier token becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.state = FetchState::Loading;
        RequestToken(self.issued)
    }

    pub fn resolve<E: Display>(&mut self, token: RequestToken, result: Result<T, E>) -> Resolution {
        if self.pending != Some(token.0) {
            tracing::debug!(token = token.0, latest = self.issued, "Dropping stale response");
            return Resolution::Stale;
        }

        self.pending = None;
        self.state = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => FetchState::Failed(e.to_string()),
        };
        Resolution::Applied
    }

    /// Back to idle; in-flight requests resolve as stale.
    pub fn reset(&mut self) {
        self.pending = None;
        self.state = FetchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_then_settles() {
        let mut loader: Loader<Vec<u32>> = Loader::new();
        assert_eq!(loader.state(), &FetchState::Idle);

        let token = loader.begin();
        assert!(loader.state().is_loading());

        let outcome = loader.resolve(token, Ok::<_, String>(vec![1, 2, 3]));
        assert_eq!(outcome, Resolution::Applied);
        assert_eq!(loader.state().data(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn failures_keep_the_message() {
        let mut loader: Loader<u32> = Loader::new();
        let token = loader.begin();

        loader.resolve(token, Err::<u32, _>("Internal Server Error"));
        assert_eq!(loader.state().error(), Some("Internal Server Error"));
    }

    #[test]
    fn superseded_responses_are_dropped() {
        let mut loader: Loader<&str> = Loader::new();
        let first = loader.begin();
        let second = loader.begin();

        assert_eq!(loader.resolve(second, Ok::<_, String>("page 2")), Resolution::Applied);
        assert_eq!(loader.resolve(first, Ok::<_, String>("page 1")), Resolution::Stale);
        assert_eq!(loader.state().data(), Some(&"page 2"));
    }

    #[test]
    fn late_response_after_newer_request_started() {
        let mut loader: Loader<&str> = Loader::new();
        let first = loader.begin();
        let _second = loader.begin();

        assert_eq!(loader.resolve(first, Ok::<_, String>("old")), Resolution::Stale);
        assert!(loader.state().is_loading());
    }

    #[test]
    fn tokens_resolve_once() {
        let mut loader: Loader<u8> = Loader::new();
        let token = loader.begin();

        assert_eq!(loader.resolve(token, Ok::<_, String>(1)), Resolution::Applied);
        assert_eq!(loader.resolve(token, Ok::<_, String>(2)), Resolution::Stale);
        assert_eq!(loader.state().data(), Some(&1));
    }

    #[test]
    fn reset_discards_in_flight_requests() {
        let mut loader: Loader<u8> = Loader::new();
        let token = loader.begin();
        loader.reset();

        assert_eq!(loader.resolve(token, Ok::<_, String>(1)), Resolution::Stale);
        assert_eq!(loader.state(), &FetchState::Idle);
    }
}
