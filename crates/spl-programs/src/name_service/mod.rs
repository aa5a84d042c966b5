//! Client for the name service program.

pub mod instructions;
pub mod layout;
pub mod state;

pub use instructions::{
    create_name, decode_create_name, decode_delete_name, decode_transfer_name, decode_update_name,
    delete_name, name_account_address, transfer_name, update_name, AccountSlot, CreateNameParams,
    DeleteNameParams, TransferNameParams, UpdateNameParams,
};
pub use layout::{NameInstruction, NameInstructionType, HASHED_NAME_LEN};
pub use state::{fetch_name_record, NameRecord, NameRecordHeader, NAME_RECORD_HEADER_LEN};
