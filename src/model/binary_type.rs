/// One of the fixed signal-vs-QCD dataset layouts produced by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryType {
    pub name: &'static str,
    pub processes: &'static [&'static str],
    pub score_branch: &'static str,
}

pub const WZ_VS_QCD: BinaryType = BinaryType {
    name: "WZ_vs_QCD",
    processes: &["WToQQ", "ZToQQ", "WZ"],
    score_branch: "score_(label_Wqq) | (label_Zqq)",
};

pub const HTOCC_VS_QCD: BinaryType = BinaryType {
    name: "HToCC_vs_QCD",
    processes: &["HToCC"],
    score_branch: "score_label_Hcc",
};

pub const TTBAR_VS_QCD: BinaryType = BinaryType {
    name: "TTbar_vs_QCD",
    processes: &["TTBar"],
    score_branch: "score_label_Tbqq",
};

/// Detection order matters: the first layout whose name appears in any file wins.
pub const KNOWN_BINARY_TYPES: [BinaryType; 3] = [WZ_VS_QCD, HTOCC_VS_QCD, TTBAR_VS_QCD];

pub const QCD_PROCESS: &str = "QCD";
pub const QCD_BRANCH: &str = "score_label_QCD";

/// Pseudo-process evaluating W and Z jets together as one signal class.
pub const COMBINED_PROCESS: &str = "WZ";
pub const COMBINED_MEMBERS: [&str; 2] = ["WToQQ", "ZToQQ"];

/// Source processes whose events form the positive class for `process`.
pub fn signal_members(process: &str) -> Vec<&str> {
    if process == COMBINED_PROCESS {
        COMBINED_MEMBERS.to_vec()
    } else {
        vec![process]
    }
}
