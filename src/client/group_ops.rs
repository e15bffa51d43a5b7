//! Group selection and per-group article listings
//!
//! - GROUP - Select a newsgroup
//! - LISTGROUP - Article numbers of a group
//! - XOVER - Overview records of the selected group

use crate::commands::{self, GroupInfo, OverviewEntry};
use crate::error::Result;
use tracing::debug;

use super::NntpClient;

impl NntpClient {
    /// Select a newsgroup
    ///
    /// Returns [`GroupInfo`] with article count and range parsed from the 211 line.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - 411, the newsgroup does not exist
    /// - [`NntpError::MalformedResponse`](crate::NntpError::MalformedResponse) - Could not parse the 211 line
    pub async fn select_group(&mut self, newsgroup: &str) -> Result<GroupInfo> {
        debug!("Selecting newsgroup: {}", newsgroup);

        let response = self.execute_ok(&commands::group(newsgroup)).await?;
        let info = commands::parse_group_response(&response, newsgroup)?;
        self.current_group = Some(info.name.clone());

        debug!(
            "Group {} selected: {} articles ({}-{})",
            info.name, info.count, info.first, info.last
        );
        Ok(info)
    }

    /// List article numbers in a newsgroup
    ///
    /// With a name, the group is also selected; `None` lists the current group.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_reader::{NntpClient, ServerConfig};
    /// # use std::sync::Arc;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = ServerConfig::new("news.example.com");
    /// # let mut client = NntpClient::connect(Arc::new(config)).await?;
    /// let numbers = client.listgroup(Some("comp.lang.rust")).await?;
    /// println!("{} articles available", numbers.len());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - 411 or 412
    /// - [`NntpError::MalformedListing`](crate::NntpError::MalformedListing) - A line is not an article number
    pub async fn listgroup(&mut self, newsgroup: Option<&str>) -> Result<Vec<u64>> {
        debug!("Listing articles in {:?}", newsgroup.or(self.current_group()));

        let response = self.execute_multiline(&commands::listgroup(newsgroup)).await?;
        let numbers = commands::parse_article_numbers(&response.lines)?;
        if let Some(name) = newsgroup {
            self.current_group = Some(name.to_string());
        }

        debug!("LISTGROUP returned {} article numbers", numbers.len());
        Ok(numbers)
    }

    /// Article numbers from XOVER, keeping only the first field of each record
    ///
    /// `range` is passed through verbatim ("100-200", "100-", "150"); `None`
    /// means the current article.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) - 412, 420 or 423
    /// - [`NntpError::MalformedListing`](crate::NntpError::MalformedListing) - A record does not start with a number
    pub async fn overview(&mut self, range: Option<&str>) -> Result<Vec<u64>> {
        let response = self.execute_multiline(&commands::xover(range)).await?;
        response
            .lines
            .iter()
            .map(|line| commands::parse_overview_number(line))
            .collect()
    }

    /// Fully decoded XOVER records
    ///
    /// # Errors
    ///
    /// As [`overview`](Self::overview), plus
    /// [`NntpError::MalformedListing`](crate::NntpError::MalformedListing) for records
    /// with fewer than eight fields or non-numeric counts.
    pub async fn overview_entries(&mut self, range: Option<&str>) -> Result<Vec<OverviewEntry>> {
        let response = self.execute_multiline(&commands::xover(range)).await?;
        let entries = response
            .lines
            .iter()
            .map(|line| commands::parse_xover_line(line))
            .collect::<Result<Vec<_>>>()?;

        debug!("XOVER returned {} entries", entries.len());
        Ok(entries)
    }
}
