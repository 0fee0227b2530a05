pub mod golfer;
pub mod member;
pub mod member_type;
pub mod participation;
pub mod tournament;

pub use golfer::{Golfer, GolferInput, GolferRow, TournamentDetail};
pub use member::{Member, MemberInput};
pub use member_type::{MemberType, MemberTypeInput};
pub use participation::{ParticipationKey, TournamentParticipation};
pub use tournament::{ParticipationDetail, Tournament, TournamentInput, TournamentRow, TOURNAMENT_FORMATS};
