mod calendar;
mod countdowns;
mod editor;
mod feed;
mod search;

pub(crate) use calendar::CalendarPage;
pub(crate) use countdowns::CountdownsPage;
pub(crate) use editor::EditorPage;
pub(crate) use feed::FeedPage;
pub(crate) use search::SearchPage;
