//! NNTP response types and status codes

/// Reply class, selected by the first digit of the status code (RFC 977 Section 2.4.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 1xx - informative message
    Informational,
    /// 2xx - command ok
    Completion,
    /// 3xx - command ok so far, send the rest of it
    Intermediate,
    /// 4xx - command correct, but couldn't be performed
    TransientNegative,
    /// 5xx - command unimplemented, incorrect, or a serious program error
    PermanentNegative,
    /// Anything outside 100-599
    Unknown,
}

impl ResponseClass {
    /// Classify a 3-digit response code
    pub fn of(code: u16) -> Self {
        match code / 100 {
            1 => ResponseClass::Informational,
            2 => ResponseClass::Completion,
            3 => ResponseClass::Intermediate,
            4 => ResponseClass::TransientNegative,
            5 => ResponseClass::PermanentNegative,
            _ => ResponseClass::Unknown,
        }
    }
}

/// NNTP response with status code, message, and optional multi-line body
///
/// Every command execution returns one of these by value; the session keeps no
/// "last response" of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NntpResponse {
    /// 3-digit NNTP response code
    pub code: u16,
    /// Status message from server
    pub message: String,
    /// Multi-line response body, already unstuffed (empty for single-line responses)
    pub lines: Vec<String>,
}

impl NntpResponse {
    /// Reply class of this response
    pub fn class(&self) -> ResponseClass {
        ResponseClass::of(self.code)
    }

    /// Check if response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Check if response indicates continuation (3xx)
    pub fn is_continuation(&self) -> bool {
        self.code >= 300 && self.code < 400
    }

    /// Check if response indicates error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// First whitespace-separated token of the status text
    pub fn first_token(&self) -> Option<&str> {
        self.message.split_whitespace().next()
    }
}

/// NNTP response codes (RFC 977, with the AUTHINFO extension codes)
#[allow(dead_code)]
pub mod codes {
    // 1xx - Informational
    /// Help text follows
    pub const HELP_TEXT_FOLLOWS: u16 = 100;
    /// Server date/time
    pub const SERVER_DATE: u16 = 111;

    // 2xx - Success
    /// Server ready, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Server ready, no posting
    pub const READY_NO_POSTING: u16 = 201;
    /// Closing connection
    pub const CLOSING_CONNECTION: u16 = 205;
    /// Group selected
    pub const GROUP_SELECTED: u16 = 211;
    /// List of newsgroups follows
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// Article follows
    pub const ARTICLE_FOLLOWS: u16 = 220;
    /// Head follows
    pub const HEAD_FOLLOWS: u16 = 221;
    /// Body follows
    pub const BODY_FOLLOWS: u16 = 222;
    /// Article selected, text must be requested separately
    pub const ARTICLE_STAT: u16 = 223;
    /// Overview information follows
    pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;
    /// List of new articles follows
    pub const NEW_ARTICLE_LIST_FOLLOWS: u16 = 230;
    /// List of new newsgroups follows
    pub const NEW_NEWSGROUPS_FOLLOW: u16 = 231;
    /// Authentication accepted
    pub const AUTH_ACCEPTED: u16 = 281;

    // 3xx - Continuation
    /// More authentication information required
    pub const AUTH_CONTINUE: u16 = 381;

    // 4xx - Temporary errors
    /// Service discontinued / temporarily unavailable
    pub const SERVICE_UNAVAILABLE: u16 = 400;
    /// No such newsgroup
    pub const NO_SUCH_GROUP: u16 = 411;
    /// No newsgroup selected
    pub const NO_GROUP_SELECTED: u16 = 412;
    /// No current article
    pub const NO_CURRENT_ARTICLE: u16 = 420;
    /// No next article
    pub const NO_NEXT_ARTICLE: u16 = 421;
    /// No previous article
    pub const NO_PREV_ARTICLE: u16 = 422;
    /// No article with that number
    pub const NO_SUCH_ARTICLE_NUMBER: u16 = 423;
    /// No article with that message-id
    pub const NO_SUCH_ARTICLE_ID: u16 = 430;
    /// Authentication required
    pub const AUTH_REQUIRED: u16 = 480;
    /// Authentication rejected
    pub const AUTH_REJECTED: u16 = 481;
    /// Authentication rejected (RFC 2980) / out of sequence (RFC 4643)
    pub const AUTH_OUT_OF_SEQUENCE: u16 = 482;

    // 5xx - Permanent errors
    /// Command not recognized
    pub const COMMAND_NOT_RECOGNIZED: u16 = 500;
    /// Command syntax error
    pub const COMMAND_SYNTAX_ERROR: u16 = 501;
    /// Access denied / no permission
    pub const ACCESS_DENIED: u16 = 502;
    /// Program fault / feature not supported
    pub const FEATURE_NOT_SUPPORTED: u16 = 503;
}
