//! Certificate fixtures shared by the integration tests.

#![allow(dead_code)]

/// PEM product certificate carrying product id 69 (RHEL server).
pub const PRODUCT_PEM_69: &str = "-----BEGIN CERTIFICATE-----
MIIGEjCCA/qgAwIBAgIJALDxRLt/tWEVMA0GCSqGSIb3DQEBBQUAMIGuMQswCQYD
VQQGEwJVUzEXMBUGA1UECAwOTm9ydGggQ2Fyb2xpbmExFjAUBgNVBAoMDVJlZCBI
YXQsIEluYy4xGDAWBgNVBAsMD1JlZCBIYXQgTmV0d29yazEuMCwGA1UEAwwlUmVk
IEhhdCBFbnRpdGxlbWVudCBQcm9kdWN0IEF1dGhvcml0eTEkMCIGCSqGSIb3DQEJ
ARYVY2Etc3VwcG9ydEByZWRoYXQuY29tMB4XDTE4MDQxMzExMTk0NVoXDTM4MDQw
ODExMTk0NVowRDFCMEAGA1UEAww5UmVkIEhhdCBQcm9kdWN0IElEIFsxMjYxMjAy
ZS01Yjc2LTQ1MTMtOTlmMi05Mzk2NmFjZGY0MmJdMIICIjANBgkqhkiG9w0BAQEF
AAOCAg8AMIICCgKCAgEAxj9J04z+Ezdyx1U33kFftLv0ntNS1BSeuhoZLDhs18yk
sepG7hXXtHh2CMFfLZmTjAyL9i1XsxykQpVQdXTGpUF33C2qBQHB5glYs9+d781x
8p8m8zFxbPcW82TIJXbgW3ErVh8vk5qCbG1cCAAHb+DWMq0EAyy1bl/JgAghYNGB
RvKJObTdCrdpYh02KUqBLkSPZHvo6DUJFN37MXDpVeQq9VtqRjpKLLwuEfXb0Y7I
5xEOrR3kYbOaBAWVt3mYZ1t0L/KfY2jVOdU5WFyyB9PhbMdLi1xE801j+GJrwcLa
xmqvj4UaICRzcPATP86zVM1BBQa+lilkRQes5HyjZzZDiGYudnXhbqmLo/n0cuXo
QBVVjhzRTMx71Eiiahmiw+U1vGqkHhQNxb13HtN1lcAhUCDrxxeMvrAjYdWpYlpI
yW3NssPWt1YUHidMBSAJ4KctIf91dyE93aStlxwC/QnyFsZOmcEsBzVCnz9GmWMl
1/6XzBS1yDUqByklx0TLH+z/sK9A+O2rZAy1mByCYwVxvbOZhnqGxAuToIS+A81v
5hCjsCiOScVB+cil30YBu0cH85RZ0ILNkHdKdrLLWW4wjphK2nBn2g2i3+ztf+nQ
ED2pQqZ/rhuW79jcyCZl9kXqe1wOdF0Cwah4N6/3LzIXEEKyEJxNqQwtNc2IVE8C
AwEAAaOBmzCBmDAJBgNVHRMEAjAAMDAGCysGAQQBkggJAUUBBCEMH1JlZCBIYXQg
RW50ZXJwcmlzZSBMaW51eCBTZXJ2ZXIwGQYLKwYBBAGSCAkBRQIECgwINy42IEJl
dGEwFwYLKwYBBAGSCAkBRQMECAwGeDg2XzY0MCUGCysGAQQBkggJAUUEBBYMFHJo
ZWwtNyxyaGVsLTctc2VydmVyMA0GCSqGSIb3DQEBBQUAA4ICAQBfm/EhFPJpd16p
mlfi3FysnVOBdsBcoiGhHcNXsvklriWvBTauh4Aq8EsGb14bZziQ3ttEcHm/qnJd
ZIocbbFIb0317ph4l5+ilIy8Zu/9cu7ZSJpdKPnDV0qOnqdxrMGpQjEK5oukSl+d
2p0+qh5hKYZGOx9Jn3lBneKCQg1g8SLOE9DugWWzK5VwuZ/EhVRFl26NCX7Mr45X
2WkvTVlC9vPNGD9OUDqBcdSX6hmnWXEcfqwN2/rAoYVybfA7GTauNTeglFaNytvM
LfQsrBZCmHoM17q7X6+cKBcNLL2OnV5/EHTPEovqyus7In2wbW9UHopIlmkBrv0f
VR1MTipcBhfTrZ9X2/aS1D0hXAE987bMPKZdnrEnXwz+FpLET/89bk2Zus5QCe6b
9ZcUgOlrPcNs4sf9g0fquEvxz1ipl87EGzJOsmbj8bwR+ZPvs7igj3pZSY1hVjt8
PJSnPRn8H9+KxLFLGm8vdBsVeTvXalAT1SGVC6fTzIEWzisZ8PXOYeMw/j2EC2ja
vZ5sqc/+0iTLkHj2YbKy9UtJn30nQG185GWhrPm3qHovh+u1wSRLbb97oitMIoJ9
8X/saMhUG2gzyz+jBETDTGsJyEvaMFXcR7ZoTJXh5z5Sj9q4wjeNC4xL0nFLya3j
5IbpY9kFCqOizzZKTjgzc3sUIzECgw==
-----END CERTIFICATE-----
";

/// Truncated certificate body; fails PEM/DER parsing.
pub const TRUNCATED_PEM: &str = "-----BEGIN CERTIFICATE-----
MIIGEjCCA/qgAwIBAgIJALDxRLt/tWEVMA0GCSqGSIb3DQEBBQUAMIGuMQswCQYD
-----END CERTIFICATE-----
";

/// Well-formed consumer identity certificate without the product namespace OID.
pub const CONSUMER_PEM: &str = "-----BEGIN CERTIFICATE-----
MIID3jCCAsagAwIBAgIIbPqoOJvSK6kwDQYJKoZIhvcNAQELBQAwPzEeMBwGA1UE
AwwVY2FuZGxlcGluLmV4YW1wbGUuY29tMQswCQYDVQQGEwJVUzEQMA4GA1UEBwwH
UmFsZWlnaDAeFw0xODEwMjkxNTE3MzFaFw0zNDEwMjkxNjE3MzFaMC8xLTArBgNV
BAMMJGZjMWZkMjQ0LWQ2NTctNDYxYS05Y2Y5LTJmZWY3NWEzZjE2ZDCCASIwDQYJ
KoZIhvcNAQEBBQADggEPADCCAQoCggEBALSkszwgwxOJKzVUxY3beo2p7LgTglTQ
/hd7bYBfSk/1FuTpA+FKebQ6FjivwtFUMc9H9bGPesXYxNzK8fW7MClL8aJwb0Sq
arABRWtBpbKK+aDlJyerhPUCOFLSS5Udg5Ma784rOgutcTtnmCzcZYQYDDpwsp3E
lqZBC+DURa5rkn5ICE91/o/RqgZQl4NZMQucVUk28TAl0XiqwXhVCB+aswhB2O07
7NmkcFYwfG9za26qgn4GJGHq3WrGFbMzqtF/G+td5lGhFYLpvgv/uP6i8/kA79js
fSH5Hw6KUdCu/SAS+zMDqCK3l08eAXN9GQ8Bm4Y7G35jBEBmKHGMpNMCAwEAAaOB
7TCB6jAOBgNVHQ8BAf8EBAMCBLAwEwYDVR0lBAwwCgYIKwYBBQUHAwIwCQYDVR0T
BAIwADARBglghkgBhvhCAQEEBAMCBaAwHQYDVR0OBBYEFP6KB1M8+eO2yUT5Zynd
VhWWh2psMB8GA1UdIwQYMBaAFHkScHy3YqTKDWnl00rUoqBk+mcdMGUGA1UdEQRe
MFykMTAvMS0wKwYDVQQDDCRmYzFmZDI0NC1kNjU3LTQ2MWEtOWNmOS0yZmVmNzVh
M2YxNmSkJzAlMSMwIQYDVQQDDBpjZW50b3M3LnN1Ym1hbi5leGFtcGxlLmNvbTAN
BgkqhkiG9w0BAQsFAAOCAQEAk+k/OdSuPoDGCnSHraIyUfqd/2GaSz6aiDcuEJ5w
AYj6TKzkLmBdNCPse2EJhEKRtpzjge2Z5+Oqv9JBaVUAdCUIYsiY6PUww/LGmMaK
JabbKSPBPyqHE0Yr7eeEApCGdqGVvW44cOnKrjcWZlfYGigvPRtw5ozJxIv5TTyj
d40Md827SPjgVzZh0pi+rVLP2tlgX6dmiuLiavyHECRCvI/1T2LumItOgGTvADzl
+0HtMqvTs5yVKQf6XQMYTKeCI4JthptXCgC5jjabeUWTKUAzLiX4wNPmJJWxZt1i
3HxHG05Yct/CFDJncDeHl7623QhlyzasYvVPG6/VSRnzOQ==
-----END CERTIFICATE-----
";
