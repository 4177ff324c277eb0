pub mod horoscope;

pub use horoscope::{
    GenerateRequest, GenerateResponse, ReadingListResponse, ReadingQueryParams,
    DEFAULT_QUERY_LIMIT,
};
