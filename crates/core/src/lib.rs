pub mod config;
pub mod desk;
pub mod testing;
pub mod ticket;

pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, Config,
    ConfigError, ConsoleConfig, LoggingConfig, OutputFormat, StoreConfig,
};
pub use desk::{
    ConfirmationGate, DeskError, DeskOutcome, FormCollector, FormMode, FormRequest, PromptError,
    RatingPicker, TicketDesk, DELETE_CONFIRMATION,
};
pub use ticket::{
    IdStrategy, InMemoryTicketStore, StateViolation, Ticket, TicketError, TicketFilter, TicketId,
    TicketInput, TicketStatus, TicketStore, ValidationError, MAX_RATING, MIN_RATING, UNRATED,
};
