//! Entity models
//!
//! Members and churches are independent collections; a member references its
//! baptism church by display name only (no enforced foreign key, matching the
//! legacy records this system inherited).

pub mod church;
pub mod member;
pub mod settings;
pub mod sync;

pub use church::{Church, ChurchCreate, ChurchUpdate, Endereco, Pastor};
pub use member::{CargoMinisterial, EstadoCivil, Member, MemberCreate, MemberUpdate, idade_from};
pub use settings::{SheetConnection, SheetSettings, TemplateSettings};
pub use sync::ImportReport;
