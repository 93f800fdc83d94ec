pub mod stage1_extract;
pub mod stage2_classify;
pub mod stage3_report;
