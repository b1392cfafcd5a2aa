/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Divisor turning a percentage into a ratio
pub const PERCENT_DIVISOR: u32 = 100;

/// Role allowed to create, edit and delete records
pub const ROLE_ADMIN: &str = "admin";

/// Read-only role
pub const ROLE_USER: &str = "user";

/// Transaction type constants
pub const TRANSACTION_TYPE_INCOME: &str = "income";
pub const TRANSACTION_TYPE_EXPENSE: &str = "expense";
