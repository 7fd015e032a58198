pub mod allocation;
pub mod hostel;
pub mod inventory;
pub mod room;

pub use allocation::{Allocation, AllocationStatus};
pub use hostel::{Gender, Hostel, HostelTemplate};
pub use inventory::{AllocationFilter, HostelOccupancy, Inventory, InventoryStats};
pub use room::{Room, RoomStatus};
