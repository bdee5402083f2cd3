use crate::cluster::{GenderCluster, TimeCluster};

#[test]
fn gender_tokens_bucket_into_clusters() {
    assert_eq!(GenderCluster::from_token("frau"), GenderCluster::AdultFemale);
    assert_eq!(GenderCluster::from_token("Mann"), GenderCluster::AdultMale);
    assert_eq!(GenderCluster::from_token("junge"), GenderCluster::Youth);
    assert_eq!(GenderCluster::from_token("mädchen"), GenderCluster::Youth);
    assert_eq!(GenderCluster::from_token("jugendliche"), GenderCluster::Youth);
    assert_eq!(GenderCluster::from_token("gruppe"), GenderCluster::Other);
}

#[test]
fn time_cluster_boundaries() {
    assert_eq!(TimeCluster::from_time("06:00"), TimeCluster::Morning);
    assert_eq!(TimeCluster::from_time("11:59"), TimeCluster::Morning);
    assert_eq!(TimeCluster::from_time("12:00"), TimeCluster::Afternoon);
    assert_eq!(TimeCluster::from_time("17:59"), TimeCluster::Afternoon);
    assert_eq!(TimeCluster::from_time("18:00"), TimeCluster::Evening);
    assert_eq!(TimeCluster::from_time("23:59"), TimeCluster::Evening);
    assert_eq!(TimeCluster::from_time("00:00"), TimeCluster::Night);
    assert_eq!(TimeCluster::from_time("05:59"), TimeCluster::Night);
}

#[test]
fn malformed_hours_fall_through_to_night() {
    assert_eq!(TimeCluster::from_time(""), TimeCluster::Night);
    assert_eq!(TimeCluster::from_time("xx:30"), TimeCluster::Night);
    assert_eq!(TimeCluster::from_time("99:00"), TimeCluster::Night);
    assert_eq!(TimeCluster::from_time("gegen Mitternacht"), TimeCluster::Night);
}

#[test]
fn labels_round_trip() {
    for cluster in [
        TimeCluster::Morning,
        TimeCluster::Afternoon,
        TimeCluster::Evening,
        TimeCluster::Night,
    ] {
        assert_eq!(TimeCluster::from_label(cluster.label()), Some(cluster));
    }
    for cluster in [
        GenderCluster::AdultFemale,
        GenderCluster::AdultMale,
        GenderCluster::Youth,
        GenderCluster::Other,
    ] {
        assert_eq!(GenderCluster::from_label(cluster.label()), Some(cluster));
    }
}
