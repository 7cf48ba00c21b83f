mod history;

pub use history::{
    CreateHistoryEntry, CreateHistoryRequest, DeleteHistoryResponse, HistoryEntry, HistoryPage,
    Pagination, SaveHistoryResponse,
};
