use astrodata_client::ApiClient;
use color_eyre::eyre::Error;
use itertools::Itertools;

/// Delete every record whose name repeats an earlier one, keeping the lowest
/// id of each name.
pub async fn remove_duplicates(api: &ApiClient, dry_run: bool) -> Result<(), Error> {
    let stars = api.get_stars().await?;

    let mut groups = stars
        .into_iter()
        .into_group_map_by(|star| star.name.clone())
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .collect::<Vec<_>>();

    if groups.is_empty() {
        println!("No duplicates found in the catalog.");
        return Ok(());
    }

    groups.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut total_deleted = 0;
    for (name, mut group) in groups {
        group.sort_by_key(|star| star.id);

        let kept = &group[0];
        println!("Keeping {} (id: {})", name, kept.id);

        for duplicate in &group[1..] {
            if dry_run {
                println!("  Would delete duplicate (id: {})", duplicate.id);
            }
            else {
                api.delete_star(duplicate.id).await?;
                println!("  Deleted duplicate (id: {})", duplicate.id);
            }
            total_deleted += 1;
        }
    }

    if dry_run {
        println!("{total_deleted} duplicate stars would be removed.");
    }
    else {
        println!("Removed {total_deleted} duplicate stars.");
    }

    Ok(())
}
