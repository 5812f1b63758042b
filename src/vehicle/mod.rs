// 車両レイヤー - 共有状態と2種類のディスパッチ向け実装
// どちらの車両も同じ基盤データ（VehicleState）の上に成り立つ

pub mod poly;
pub mod sport;
mod state;

// 公開API
pub use poly::PolyVehicle;
pub use sport::SportVehicle;
