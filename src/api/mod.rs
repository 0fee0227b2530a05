//! External request/response shapes (camelCase JSON) and their mapping to
//! the internal models.
//!
//! Request fields default when absent so that a missing value reaches the
//! validators as "empty" and is reported per field, instead of failing JSON
//! decoding as a whole.

pub mod golfer;
pub mod member;
pub mod member_type;
pub mod participation;
pub mod tournament;

pub use golfer::{GolferRequest, GolferResponse, TournamentDetailResponse, UpdateGolferRequest};
pub use member::{MemberRequest, MemberResponse, UpdateMemberRequest};
pub use member_type::{MemberTypeRequest, MemberTypeResponse, UpdateMemberTypeRequest};
pub use participation::{
    CreateParticipationRequest, GolferParticipationRequest, ParticipationQuery, ParticipationResponse,
    TournamentEntryRequest, UpdateParticipationRequest,
};
pub use tournament::{ParticipantResponse, TournamentRequest, TournamentResponse, UpdateTournamentRequest};
