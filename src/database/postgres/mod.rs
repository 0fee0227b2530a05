//! Repositories that call the stored procedures created by migrations/.
//!
//! Every method is a single parameterized `SELECT <procedure>(...)`; the pool
//! lends a connection for that statement only.

mod golfer;
mod member;
mod member_type;
mod participation;
mod tournament;

pub use golfer::PgGolferRepository;
pub use member::PgMemberRepository;
pub use member_type::PgMemberTypeRepository;
pub use participation::PgParticipationRepository;
pub use tournament::PgTournamentRepository;
