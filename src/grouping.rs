/// Tab grouping pipeline: domain buckets first, then title-keyword clusters
///
/// Both passes only keep groups of two or more tabs. Tabs claimed by a
/// retained domain group are excluded from title clustering; everything
/// else (singleton domains, unparsable URLs) falls through and gets a
/// second chance by title. A tab that matches nothing simply stays
/// ungrouped, so the pipeline is total over any well-typed input.
use std::collections::HashSet;

use crate::domain::registrable_domain;
use crate::tab_data::{GroupColor, GroupOrigin, TabGroup, TabInfo};
use crate::tokenize::tokenize;

/// Run the whole pipeline: domain groups followed by title groups.
///
/// Output order is deterministic for a given input order: domain groups in
/// bucket-creation order, then title groups in cluster-creation order. No
/// tab id appears in more than one group.
pub fn group_tabs(tabs: &[TabInfo]) -> Vec<TabGroup> {
    let (mut groups, claimed) = group_by_domain(tabs);
    groups.extend(group_by_title(tabs, &claimed));
    log::debug!("{} tabs -> {} groups", tabs.len(), groups.len());
    groups
}

/// Bucket tabs by registrable domain, in input order.
///
/// Returns the retained (≥2 tab) domain groups plus the exclusion set of
/// tab ids they claimed. Tabs in singleton buckets are not claimed and
/// remain available to the title grouper, as do tabs whose URL yields no
/// domain.
pub fn group_by_domain(tabs: &[TabInfo]) -> (Vec<TabGroup>, HashSet<i32>) {
    // Vec rather than a hash map: bucket creation order decides output order
    let mut buckets: Vec<(String, Vec<TabInfo>)> = Vec::new();
    for tab in tabs {
        let Some(domain) = registrable_domain(&tab.url) else {
            continue;
        };
        match buckets.iter_mut().find(|(key, _)| *key == domain) {
            Some((_, members)) => members.push(tab.clone()),
            None => buckets.push((domain, vec![tab.clone()])),
        }
    }

    let mut claimed = HashSet::new();
    let mut groups = Vec::new();
    for (domain, members) in buckets {
        if members.len() < 2 {
            continue;
        }
        claimed.extend(members.iter().map(|tab| tab.id));
        groups.push(TabGroup {
            title: domain,
            tabs: members,
            color: GroupColor::Grey,
            origin: GroupOrigin::Domain,
        });
    }
    (groups, claimed)
}

/// An in-progress title cluster: the founding tab's distinct tokens serve
/// as the keyword list later tabs are matched against.
struct TitleCluster {
    keywords: Vec<String>,
    tabs: Vec<TabInfo>,
}

/// Cluster tabs by title-keyword overlap, skipping the excluded ids.
///
/// Each tab is matched against clusters in creation order and joins the
/// first cluster where any of its tokens matches any keyword; otherwise it
/// founds a new cluster. First-match-wins makes the result depend on input
/// order, which is deliberate: window tab order is stable, so the output is
/// deterministic per input.
pub fn group_by_title(tabs: &[TabInfo], excluded: &HashSet<i32>) -> Vec<TabGroup> {
    let mut clusters: Vec<TitleCluster> = Vec::new();

    for tab in tabs {
        if excluded.contains(&tab.id) {
            continue;
        }
        let tokens = distinct_tokens(&tab.title);

        let matched = clusters.iter_mut().find(|cluster| {
            tokens.iter().any(|token| {
                cluster
                    .keywords
                    .iter()
                    .any(|keyword| keyword_matches(token, keyword))
            })
        });

        match matched {
            Some(cluster) => cluster.tabs.push(tab.clone()),
            None => clusters.push(TitleCluster {
                keywords: tokens,
                tabs: vec![tab.clone()],
            }),
        }
    }

    clusters
        .into_iter()
        .filter(|cluster| cluster.tabs.len() >= 2)
        .map(|cluster| TabGroup {
            title: cluster_title(&cluster),
            tabs: cluster.tabs,
            color: GroupColor::Purple,
            origin: GroupOrigin::Title,
        })
        .collect()
}

/// Tokenize a title and keep the first occurrence of each token
fn distinct_tokens(title: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(title)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Equality or substring containment in either direction; both sides are
/// already lowercase, so comparison is case-insensitive by construction
fn keyword_matches(token: &str, keyword: &str) -> bool {
    token == keyword || keyword.contains(token) || token.contains(keyword)
}

/// Pick the cluster name: the keyword contained in the most member titles,
/// first keyword winning ties (and serving as the fallback)
fn cluster_title(cluster: &TitleCluster) -> String {
    let mut best = cluster.keywords.first().cloned().unwrap_or_default();
    let mut best_count = 0;
    for keyword in &cluster.keywords {
        let count = cluster
            .tabs
            .iter()
            .filter(|tab| tab.title.to_lowercase().contains(keyword.as_str()))
            .count();
        if count > best_count {
            best_count = count;
            best = keyword.clone();
        }
    }
    best
}
