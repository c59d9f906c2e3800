// ==========================================
// 应急物资调配规划系统 - 配送排程引擎
// ==========================================
// 职责: 对最终分配后的地点按调度顺序排程,
//       计算串行累计送达时间
// 说明: 按单链串行配送建模 (车辆依次送达),
//       不按车辆数并行展开
// ==========================================

use crate::domain::{DeliveryStop, FleetInfo, Location};
use crate::engine::priority::PrioritySorter;

// ==========================================
// DeliverySequencer - 配送排程引擎
// ==========================================
pub struct DeliverySequencer {
    sorter: PrioritySorter,
}

impl DeliverySequencer {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            sorter: PrioritySorter::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算配送顺序与预计送达时间
    ///
    /// 调度排序独立于分配排序 (优先级降序, 同级距离升序);
    /// 单段行程时间 = 距离 / 平均速度, 送达时间为序列内累计值
    ///
    /// # 参数
    /// - `locations`: 最终分配后的地点列表 (只读)
    /// - `fleet`: 车队信息 (取平均速度)
    ///
    /// # 返回
    /// 配送节点序列 (地点名 + 累计送达时间)
    pub fn sequence(&self, locations: &[Location], fleet: &FleetInfo) -> Vec<DeliveryStop> {
        let ordered = self.sorter.sort_for_delivery(locations.to_vec());

        let mut total_time = 0.0;
        ordered
            .into_iter()
            .map(|loc| {
                total_time += loc.distance / fleet.average_speed;
                DeliveryStop {
                    location: loc.name,
                    estimated_delivery_time: total_time,
                }
            })
            .collect()
    }
}
