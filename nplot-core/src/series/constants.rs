/// Browsers choke on charts with more lines than this.
pub const DEFAULT_MAX_ENDPOINTS: usize = 300;

pub const BUCKET_COUNT: usize = 10;

pub const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
