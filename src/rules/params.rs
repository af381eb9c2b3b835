//! Parameter value vocabularies for rule construction.
//!
//! Several rule parameters accept only fixed values; the constants below
//! name them. `conditional`, `units`, `option` and `outcome` parameters
//! are validated against these vocabularies when an entry is added to a
//! [`RuleBuilder`](super::RuleBuilder).

// Units parameters
pub const DAYS: &str = "0";
pub const WEEKS: &str = "1";
pub const MONTHS: &str = "2";

// Option parameters
pub const BEFORE_FIELD: &str = "0";
pub const AFTER_FIELD: &str = "1";
pub const CHARGED_AND_SUCCESSFUL: &str = "0";
pub const CANCELED: &str = "1";
pub const COMPLETED: &str = "2";
pub const CHARGED_BUT_DECLINED: &str = "3";
pub const CHARGED: &str = "0";
pub const DECLINED: &str = "1";
pub const RESUMED: &str = "0";
pub const PAUSE: &str = "1";
pub const UNPAUSE: &str = "0";
pub const ADD: &str = "0";
pub const REMOVE: &str = "1";
pub const SUCCESSFUL: &str = "0";
pub const FAILURE: &str = "1";

// Conditional parameters
pub const EQUAL_TO: &str = "Equal To";
pub const NOT_EQUAL_TO: &str = "Not Equal To";
pub const GREATER_THAN: &str = "Greater Than";
pub const LESS_THAN: &str = "Less Than";
pub const GREATER_OR_EQUAL_TO: &str = "Greater Than or Equal To";
pub const LESS_OR_EQUAL_TO: &str = "Less Than or Equal To";
pub const CONTAINS: &str = "Contains";
pub const DOES_NOT_CONTAIN: &str = "Does Not Contain";
pub const STARTS_WITH: &str = "Starts With";
pub const ENDS_WITH: &str = "Ends With";
pub const ON: &str = "1";
pub const BEFORE: &str = "2";
pub const AFTER: &str = "3";

// Relative date fields
pub const TODAY: &str = "TODAY";
pub const YESTERDAY: &str = "YESTERDAY";
pub const LAST_SUNDAY: &str = "LSUNDAY";
pub const LAST_TWO_SUNDAYS: &str = "L2SUNDAY";
pub const FIRST_DAY_THIS_MONTH: &str = "FDTMONTH";
pub const FIRST_DAY_LAST_MONTH: &str = "FDLMONTH";
pub const THIS_DAY_LAST_MONTH: &str = "TDLMONTH";
pub const FIRST_DAY_THIS_YEAR: &str = "FDTYEAR";
pub const THIS_DAY_LAST_YEAR: &str = "TDLYEAR";
pub const SEVEN_DAYS_AGO: &str = "S7DAYS";
pub const THIRTY_DAYS_AGO: &str = "S30DAYS";
pub const NINETY_DAYS_AGO: &str = "S90DAYS";
pub const HUNDRED_TWENTY_DAYS_AGO: &str = "S120DAYS";
pub const HUNDRED_EIGHTY_DAYS_AGO: &str = "S180DAYS";
pub const TOMORROW: &str = "TOMORROW";
pub const FIRST_DAY_NEXT_MONTH: &str = "FDNMONTH";
pub const THIS_DAY_NEXT_MONTH: &str = "TDNMONTH";
pub const FIRST_DAY_NEXT_YEAR: &str = "FDNYEAR";
pub const THIS_DAY_NEXT_YEAR: &str = "TDNYEAR";
pub const SEVEN_DAYS_FROM_NOW: &str = "7DFNOW";
pub const FOURTEEN_DAYS_FROM_NOW: &str = "14DFNOW";
pub const THIRTY_DAYS_FROM_NOW: &str = "30DFNOW";
pub const SIXTY_DAYS_FROM_NOW: &str = "60DFNOW";
pub const NINETY_DAYS_FROM_NOW: &str = "90DFNOW";
pub const HUNDRED_TWENTY_DAYS_FROM_NOW: &str = "120DFNOW";
pub const HUNDRED_EIGHTY_DAYS_FROM_NOW: &str = "180DFNOW";

// Card type parameters
pub const VISA: &str = "1";
pub const MASTERCARD: &str = "2";
pub const AMERICAN_EXPRESS: &str = "3";
pub const DISCOVER: &str = "4";
pub const PAYPAL: &str = "5";
pub const OTHER: &str = "6";

// Month parameters
pub const JAN: &str = "1";
pub const FEB: &str = "2";
pub const MARCH: &str = "3";
pub const APRIL: &str = "4";
pub const MAY: &str = "5";
pub const JUNE: &str = "6";
pub const JULY: &str = "7";
pub const AUG: &str = "8";
pub const SEPT: &str = "9";
pub const OCT: &str = "10";
pub const NOV: &str = "11";
pub const DEC: &str = "12";

/// Accepted values for a `units` parameter.
pub(crate) const UNIT_VALUES: [&str; 3] = [DAYS, WEEKS, MONTHS];

/// Accepted values for a `conditional` parameter.
pub(crate) const CONDITIONAL_VALUES: [&str; 13] = [
    EQUAL_TO,
    NOT_EQUAL_TO,
    GREATER_THAN,
    LESS_THAN,
    GREATER_OR_EQUAL_TO,
    LESS_OR_EQUAL_TO,
    CONTAINS,
    DOES_NOT_CONTAIN,
    STARTS_WITH,
    ENDS_WITH,
    ON,
    BEFORE,
    AFTER,
];
