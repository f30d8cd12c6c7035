//! 계산 카탈로그와 디스패치 테스트.
use rope_tools::calculation::{calculate, SpliceKind, SpliceRequest, SpliceResult};
use rope_tools::i18n::{keys, Translator};
use rope_tools::rope::RopeType;
use rope_tools::splice::{GrogSlingInput, TwistedChainSpliceInput};

#[test]
fn every_kind_is_listed_under_its_own_rope_type_once() {
    let mut seen = Vec::new();
    for rope_type in RopeType::ALL {
        for kind in SpliceKind::for_rope_type(rope_type) {
            assert_eq!(kind.rope_type(), rope_type);
            assert!(!seen.contains(&kind));
            seen.push(kind);
        }
    }
    assert_eq!(seen.len(), SpliceKind::ALL.len());
}

#[test]
fn menus_match_rope_families() {
    assert_eq!(
        SpliceKind::for_rope_type(RopeType::General),
        vec![SpliceKind::FidTable, SpliceKind::FidLength]
    );
    assert_eq!(
        SpliceKind::for_rope_type(RopeType::HollowBraid),
        vec![
            SpliceKind::LockedBrummelEyeSplice,
            SpliceKind::HollowBraidChainSplice,
            SpliceKind::GrogSling
        ]
    );
}

#[test]
fn every_title_and_label_is_translated() {
    for lang in ["en", "ko"] {
        let tr = Translator::new(lang);
        for kind in SpliceKind::ALL {
            assert_ne!(tr.t(kind.title_key()), kind.title_key(), "{lang} {kind:?}");
        }
        for rope_type in RopeType::ALL {
            assert_ne!(tr.t(rope_type.label_key()), rope_type.label_key());
        }
        assert_ne!(tr.t(keys::RESULT_LOST), keys::RESULT_LOST);
    }
}

#[test]
fn dispatch_returns_matching_result() {
    let request = SpliceRequest::TwistedChainSplice(TwistedChainSpliceInput {
        rope_diameter: 0.5,
        chain_diameter: 1.0,
        tuck_count: 5,
    });
    assert_eq!(request.kind(), SpliceKind::TwistedChainSplice);
    let result = calculate(&request).expect("chain splice");
    let lines = result.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].label_key, keys::RESULT_TOTAL);
    assert_eq!(lines[1].length, 7.5);
}

#[test]
fn dispatch_propagates_invalid_input() {
    let request = SpliceRequest::GrogSling(GrogSlingInput {
        rope_diameter: 0.5,
        sling_radius: 0.0,
    });
    assert!(calculate(&request).is_err());
}

#[test]
fn fid_result_lists_all_sections() {
    let result = calculate(&SpliceRequest::FidLength { rope_diameter: 1.0 }).unwrap();
    let SpliceResult::FidLength(sections) = result else {
        panic!("unexpected result {result:?}");
    };
    assert_eq!(sections.short_section, 5.25);
    let lengths: Vec<f64> = result.lines().iter().map(|l| l.length).collect();
    assert_eq!(lengths, vec![5.25, 10.5, 14.0, 21.0]);
}

#[test]
fn references_only_on_handbook_splices() {
    assert_eq!(SpliceKind::TwistedEyeSplice.reference(), Some("ABOK #2725"));
    assert_eq!(SpliceKind::TwistedBackSplice.reference(), Some("ABOK #2813"));
    assert_eq!(SpliceKind::GrogSling.reference(), None);
}
