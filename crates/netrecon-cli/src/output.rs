//! Pretty-printed scan results.

use colored::Colorize;
use netrecon::{Host, Scan};

/// Print the full result tree for every scanned target, then the
/// summary sections.
pub fn print_scan(scan: &Scan) {
    for host in &scan.targets {
        print_host(host);
    }

    if !scan.bad_targets.is_empty() {
        println!();
        println!("{}", "Unscannable targets:".bold().underline());
        for target in &scan.bad_targets {
            println!("  {}", target.red());
        }
    }

    if !scan.secondary_targets.is_empty() {
        println!();
        println!("{}", "Secondary targets (reverse sweep):".bold().underline());
        for host in &scan.secondary_targets {
            for ip in &host.ips {
                println!("  {}", ip_line(ip));
            }
        }
    }
}

/// Print one host with every enrichment facet that produced data.
pub fn print_host(host: &Host) {
    println!();
    println!("{} {}", "Host:".bold(), host.to_string().cyan().bold());

    if !host.ips.is_empty() {
        println!();
        println!("  {}", "Addresses:".bold());
        for ip in &host.ips {
            println!("    {}", ip_line(ip));
        }
    }

    print_sub_hosts("Name servers:", &host.name_servers);
    print_sub_hosts("Mail exchangers:", &host.mail_exchangers);

    if let Some(registration) = &host.registration {
        println!();
        println!("  {}", "Registration:".bold());
        for line in registration.lines() {
            println!("    {line}");
        }
    }

    if !host.cidr_cache.is_empty() {
        println!();
        println!("  {}", "Network blocks:".bold());
        for (net, record) in host.cidr_cache.iter() {
            println!("    {}", net.to_string().yellow());
            for (key, value) in record {
                println!("      {key}: {value}");
            }
        }
    }

    print_intel(host);

    if let Some(page) = &host.company_page {
        println!();
        println!("  {} {}", "Company page:".bold(), page);
    }

    if !host.subdomains.is_empty() {
        let mut subdomains = host.subdomains.clone();
        subdomains.sort_by(|a, b| a.domain.cmp(&b.domain));

        println!();
        println!("  {}", "Subdomains:".bold());
        for sub in &subdomains {
            println!("    {}", sub_host_line(sub));
        }
    }
}

fn print_sub_hosts(label: &str, hosts: &[Host]) {
    if hosts.is_empty() {
        return;
    }
    println!();
    println!("  {}", label.bold());
    for host in hosts {
        println!("    {}", sub_host_line(host));
    }
}

fn print_intel(host: &Host) {
    for ip in &host.ips {
        let Some(intel) = &ip.intel else {
            continue;
        };
        println!();
        println!(
            "  {} {}",
            "Service intelligence for".bold(),
            ip.address.to_string().cyan()
        );
        if let Some(org) = &intel.org {
            println!("    Organization: {org}");
        }
        if let Some(os) = &intel.os {
            println!("    OS: {os}");
        }
        for service in &intel.services {
            let banner_head = service.banner.lines().next().unwrap_or("");
            println!("    {} {}", format!("{}/tcp", service.port).green(), banner_head);
        }
    }
}

/// One line for an IP record: address, reverse names, owning block.
fn ip_line(ip: &netrecon::IpRecord) -> String {
    let mut line = ip.address.to_string();
    if !ip.reverse_names.is_empty() {
        line.push_str(&format!(" ({})", ip.reverse_names.join(", ")));
    }
    if let Some(cidr) = ip.cidr {
        line.push_str(&format!(" [{cidr}]"));
    }
    line
}

/// One line for a nested host: name plus its resolved addresses.
fn sub_host_line(host: &Host) -> String {
    let addresses: Vec<String> = host
        .ips
        .iter()
        .map(|ip| ip.address.to_string())
        .collect();
    match &host.domain {
        Some(domain) if addresses.is_empty() => domain.clone(),
        Some(domain) => format!("{domain} ({})", addresses.join(", ")),
        None => addresses.join(", "),
    }
}
