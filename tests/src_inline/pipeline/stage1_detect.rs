use super::*;
use crate::input::test_support::make_temp_dir;
use crate::model::binary_type::{HTOCC_VS_QCD, TTBAR_VS_QCD, WZ_VS_QCD};

#[test]
fn test_detect_htocc_only() {
    let names = ["pred_HToCC_vs_QCD_HToCC.root", "pred_HToCC_vs_QCD_QCD.root"];
    let bt = detect_from_names(&names).unwrap();
    assert_eq!(
        (bt.name, bt.processes, bt.score_branch),
        ("HToCC_vs_QCD", &["HToCC"][..], "score_label_Hcc")
    );
}

#[test]
fn test_detect_wz_and_ttbar() {
    let wz = detect_from_names(&["pred_WZ_vs_QCD_WToQQ.root"]).unwrap();
    assert_eq!(wz, WZ_VS_QCD);
    assert_eq!(wz.processes, &["WToQQ", "ZToQQ", "WZ"]);
    assert_eq!(wz.score_branch, "score_(label_Wqq) | (label_Zqq)");

    let tt = detect_from_names(&["pred_TTbar_vs_QCD_QCD.root"]).unwrap();
    assert_eq!(tt, TTBAR_VS_QCD);
    assert_eq!(tt.processes, &["TTBar"]);
}

#[test]
fn test_detect_priority_wz_first() {
    let names = ["pred_HToCC_vs_QCD_QCD.root", "pred_WZ_vs_QCD_QCD.root"];
    assert_eq!(detect_from_names(&names), Some(WZ_VS_QCD));
}

#[test]
fn test_detect_no_match() {
    assert_eq!(detect_from_names(&["notes.txt", "pred_other.root"]), None);
    let empty: [&str; 0] = [];
    assert_eq!(detect_from_names(&empty), None);
}

#[test]
fn test_run_stage1_on_directory() {
    let dir = make_temp_dir("detect");
    std::fs::create_dir_all(dir.join("plots")).unwrap();
    std::fs::write(dir.join("pred_HToCC_vs_QCD_HToCC.root"), b"").unwrap();
    assert_eq!(run_stage1(&dir).unwrap(), HTOCC_VS_QCD);
}

#[test]
fn test_run_stage1_fails_without_match() {
    let dir = make_temp_dir("detect_none");
    std::fs::write(dir.join("readme.md"), b"").unwrap();
    let err = run_stage1(&dir).unwrap_err();
    assert!(matches!(err, DetectError::NoMatch { .. }));
    assert!(err.to_string().contains("cannot detect"));
}
