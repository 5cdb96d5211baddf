use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading recibos file.");
define_client_error!(WriteError, "Error writing recibos file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid recibos JSON.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidConfig,
    "Invalid configuration: {details}.",
    { details: &str }
);

// Form-related.
define_client_error!(
    MissingRequiredField,
    "Required field '{field}' is empty.",
    { field: &str }
);

// Printable card.
define_client_error!(
    UnreplacedPlaceholdersRemain,
    "Card template references unknown placeholders: {keys:?}.",
    { keys: &Vec<String> }
);

// Remote endpoint.
define_internal_error!(
    ApiRequestFailed,
    "Request to '{endpoint}' failed.",
    { endpoint: &str }
);
define_internal_error!(
    ApiUnexpectedStatus,
    "Request to '{endpoint}' returned unexpected status {status}.",
    { endpoint: &str, status: u16 }
);
