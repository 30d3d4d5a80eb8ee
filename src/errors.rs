use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    UnknownJurisdiction,
    "Unknown jurisdiction code: '{code}'. Supported codes are 'US' and 'KR'.",
    { code: &str }
);

// Bookkeeping-related.
define_client_error!(
    NegativeAmount,
    "Transaction amounts must be non-negative (got {amount}).",
    { amount: f64 }
);
define_client_error!(
    UnknownInvoiceItem,
    "Invoice item {id} does not exist in this draft.",
    { id: u64 }
);

// Receipt extraction.
define_client_error!(
    MissingApiKey,
    "No API key configured for the vision service. Set {env_var}.",
    { env_var: &str }
);
define_client_error!(
    ExtractionError,
    "Could not extract receipt data: {details}.",
    { details: &str }
);
define_internal_error!(VisionClientInit, "Failed to build vision service HTTP client.");
