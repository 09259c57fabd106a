// Domain types and value parsers
mod amount;
mod trade_date;
mod trade_record;

// Re-export commonly used types to the world
pub use amount::{parse_decimal, parse_fee};
pub use trade_date::parse_trade_date;
pub use trade_record::{HeaderRow, RawRow, TradeRecord};
