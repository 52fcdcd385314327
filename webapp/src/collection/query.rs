use tracing::debug;

// the collection list is re-queried on every keystroke in the search box, so
// several requests can be in flight at once and they may come back in any
// order.  each request gets a ticket and only the latest one is applied.

pub type QueryTicket = u64;

#[derive(Clone, Debug, PartialEq)]
pub enum ListState<T> {
    Loading,
    // a newer request is in flight, keep showing the old data
    Refreshing(T),
    Ready(T),
    // results for an older filter are never shown, so a failure has no data
    Failed(String),
}

// what the page body shows, exactly one of these at a time
#[derive(Clone, Debug, PartialEq)]
pub enum ListView<T> {
    Loading,
    Error(String),
    Data(T),
}

impl<T: Clone> ListView<&T> {
    pub fn cloned(&self) -> ListView<T> {
        match self {
            ListView::Loading => ListView::Loading,
            ListView::Error(error) => ListView::Error(error.clone()),
            ListView::Data(data) => ListView::Data((*data).clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery<T> {
    state: ListState<T>,
    latest: QueryTicket,
}

impl<T: Clone> Default for ListQuery<T> {
    fn default() -> Self {
        ListQuery {
            state: ListState::Loading,
            latest: 0,
        }
    }
}

impl<T: Clone> ListQuery<T> {
    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    // whatever is currently displayable, even if a request is in flight
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ListState::Loading | ListState::Failed(_) => None,
            ListState::Refreshing(data) | ListState::Ready(data) => Some(data),
        }
    }

    pub fn view(&self) -> ListView<&T> {
        match &self.state {
            ListState::Loading => ListView::Loading,
            ListState::Failed(error) => ListView::Error(error.clone()),
            ListState::Refreshing(data) | ListState::Ready(data) => ListView::Data(data),
        }
    }

    pub fn issue(&mut self) -> QueryTicket {
        self.latest += 1;

        self.state = match self.data() {
            Some(data) => ListState::Refreshing(data.clone()),
            None => ListState::Loading,
        };

        self.latest
    }

    // returns false if the result was superseded and dropped
    pub fn resolve(&mut self, ticket: QueryTicket, result: Result<T, String>) -> bool {
        if ticket != self.latest {
            debug!({ ticket = ticket, latest = self.latest }, "dropping superseded query result");
            return false;
        }

        self.state = match result {
            Ok(data) => ListState::Ready(data),
            Err(error) => ListState::Failed(error),
        };

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_has_no_data() {
        let mut query = ListQuery::<Vec<u32>>::default();
        assert_eq!(query.state(), &ListState::Loading);

        let ticket = query.issue();
        assert_eq!(query.state(), &ListState::Loading);
        assert_eq!(query.data(), None);

        assert!(query.resolve(ticket, Ok(vec![1, 2])));
        assert_eq!(query.state(), &ListState::Ready(vec![1, 2]));
    }

    #[test]
    fn refreshing_keeps_the_old_data() {
        let mut query = ListQuery::default();
        let ticket = query.issue();
        query.resolve(ticket, Ok(vec![1]));

        query.issue();
        assert_eq!(query.state(), &ListState::Refreshing(vec![1]));
        assert_eq!(query.data(), Some(&vec![1]));
    }

    #[test]
    fn view_follows_the_state() {
        let mut query = ListQuery::default();
        let ticket = query.issue();
        assert_eq!(query.view(), ListView::Loading);

        query.resolve(ticket, Err(String::from("server error")));
        assert_eq!(
            query.view().cloned(),
            ListView::<Vec<u32>>::Error(String::from("server error"))
        );

        let ticket = query.issue();
        assert_eq!(query.view(), ListView::Loading);

        query.resolve(ticket, Ok(vec![7]));
        assert_eq!(query.view(), ListView::Data(&vec![7]));
    }

    #[test]
    fn last_request_wins() {
        let mut query = ListQuery::default();

        let first = query.issue();
        let second = query.issue();

        // the newer request finishes first
        assert!(query.resolve(second, Ok(vec![2])));
        assert!(!query.resolve(first, Ok(vec![1])));

        assert_eq!(query.state(), &ListState::Ready(vec![2]));
    }

    #[test]
    fn failures_drop_results_for_the_old_filter() {
        let mut query = ListQuery::default();
        let ticket = query.issue();
        query.resolve(ticket, Ok(vec!["Work", "Personal"]));

        // the filter changed and the new query failed
        let ticket = query.issue();
        assert_eq!(query.data(), Some(&vec!["Work", "Personal"]));

        query.resolve(ticket, Err(String::from("offline")));

        assert_eq!(query.state(), &ListState::Failed(String::from("offline")));
        assert_eq!(query.data(), None);

        // the page shows the error alone, not a spinner or the old grid
        assert_eq!(query.view(), ListView::Error(String::from("offline")));

        // and the next query starts from nothing
        query.issue();
        assert_eq!(query.state(), &ListState::Loading);
    }
}
